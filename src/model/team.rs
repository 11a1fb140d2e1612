//! Core team document type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::assignment::{Assignment, Exclusion};

/// Maximum number of wishlist items per participant.
pub const MAX_WISHLIST_ITEMS: usize = 3;

/// A single wish on a participant's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Short name of the wished-for item.
    pub item_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the item (shop page, wiki, ...).
    #[serde(default)]
    pub link: Option<String>,
    /// Rough price range (e.g. "under 50").
    #[serde(default)]
    pub price_range: Option<String>,
    /// When the item was added.
    pub added_at: DateTime<Utc>,
}

/// One member of a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier within the team.
    pub id: String,
    /// Name shown to the rest of the group.
    pub display_name: String,
    /// Email address for notifications, if the participant shared one.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether this participant created and runs the team.
    #[serde(default)]
    pub is_organizer: bool,
    /// The participant's wishlist, at most [`MAX_WISHLIST_ITEMS`] entries.
    #[serde(default)]
    pub wishlist: Vec<WishlistItem>,
}

/// A Secret Santa team: one YAML document in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Team name shown in emails and the CLI.
    pub name: String,
    /// Optional company or group the team belongs to.
    #[serde(default)]
    pub company_name: Option<String>,
    /// When the gifts are exchanged.
    pub event_date: DateTime<Utc>,
    /// Shareable join token.
    pub token: String,
    /// Suggested gift budget.
    #[serde(default)]
    pub budget: Option<f64>,
    /// Currency for the budget.
    pub currency: String,
    /// Locked teams refuse new participants.
    #[serde(default)]
    pub is_locked: bool,
    /// Set once a draw has produced assignments.
    #[serde(default)]
    pub draw_complete: bool,
    /// When the team was created.
    pub created_at: DateTime<Utc>,
    /// Everyone in the team, organizer included.
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Directional exclusion rules for the draw.
    #[serde(default)]
    pub exclusions: Vec<Exclusion>,
    /// Assignments from the most recent draw, empty before the first.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Team {
    /// Looks up a participant by identifier.
    #[must_use]
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Looks up a participant by display name, case-insensitively.
    ///
    /// Join treats a matching name as a returning participant, so the
    /// same comparison is used everywhere names resolve to people.
    #[must_use]
    pub fn participant_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.display_name.eq_ignore_ascii_case(name))
    }

    /// Mutable variant of [`Team::participant_by_name`].
    pub fn participant_by_name_mut(&mut self, name: &str) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.display_name.eq_ignore_ascii_case(name))
    }

    /// Returns the organizer, if one exists.
    #[must_use]
    pub fn organizer(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_organizer)
    }

    /// Returns the assignment where the given participant is the giver.
    #[must_use]
    pub fn assignment_for(&self, giver_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.giver_id == giver_id)
    }

    /// Returns `true` if the directional exclusion is already recorded.
    #[must_use]
    pub fn has_exclusion(&self, excluder_id: &str, excluded_id: &str) -> bool {
        self.exclusions
            .iter()
            .any(|e| e.excluder_id == excluder_id && e.excluded_id == excluded_id)
    }
}
