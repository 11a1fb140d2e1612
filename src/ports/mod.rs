//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (time, randomness, IDs, join tokens, filesystem, email).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod id_gen;
pub mod mailer;
pub mod rng;
pub mod token_gen;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
pub use mailer::{EmailMessage, Mailer, SendFuture};
pub use rng::Rng;
pub use token_gen::TokenGenerator;
