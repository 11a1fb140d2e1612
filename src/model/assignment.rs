//! Draw records: exclusion rules and assignments.

use serde::{Deserialize, Serialize};

/// A rule forbidding one specific giver -> receiver pairing.
///
/// Exclusions are directional: excluding A -> B says nothing about
/// B -> A unless a second rule records it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    /// Participant who must not be the giver in the pair.
    pub excluder_id: String,
    /// Participant the excluder must not draw.
    pub excluded_id: String,
}

/// One gift-giving pair produced by a completed draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Participant responsible for the gift.
    pub giver_id: String,
    /// Participant who receives it.
    pub receiver_id: String,
}
