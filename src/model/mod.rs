//! Domain model for teams, participants, and draw records.

pub mod assignment;
pub mod team;

pub use assignment::{Assignment, Exclusion};
pub use team::{Participant, Team, WishlistItem, MAX_WISHLIST_ITEMS};
