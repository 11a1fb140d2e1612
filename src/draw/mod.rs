//! Draw service orchestrating a team's draw around the assignment core.
//!
//! Loads nothing and saves nothing itself: the command layer owns the
//! store round-trip, and replacing the whole team document afterwards is
//! what makes the draw atomic. This module only applies the product
//! guards and mutates the in-memory team.

use crate::assign;
use crate::model::Team;
use crate::ports::rng::Rng;

/// Runs the draw for a team on behalf of a participant.
///
/// Guards, in order: the requesting participant must exist and be the
/// organizer, the team needs at least three participants, and everyone
/// must have at least one wishlist item. Then the assignment generator
/// runs; on success any prior assignments are replaced and the team is
/// marked drawn and locked. Running the draw again later replaces the
/// previous result the same way.
///
/// # Errors
///
/// Returns a user-facing error string when a guard fails or no valid
/// assignment exists within the generator's attempt budget.
pub fn run_draw(rng: &dyn Rng, team: &mut Team, requested_by: &str) -> Result<(), String> {
    let requester = team
        .participant(requested_by)
        .ok_or_else(|| format!("Participant {requested_by} not found in team {}", team.token))?;
    if !requester.is_organizer {
        return Err("Only the organizer can trigger the draw".to_string());
    }

    if team.participants.len() < assign::MIN_PARTICIPANTS {
        return Err(format!(
            "Minimum {} participants required for the draw",
            assign::MIN_PARTICIPANTS
        ));
    }

    let missing: Vec<&str> = team
        .participants
        .iter()
        .filter(|p| p.wishlist.is_empty())
        .map(|p| p.display_name.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(format!(
            "All participants must have at least one wishlist item (missing: {})",
            missing.join(", ")
        ));
    }

    let participant_ids: Vec<String> = team.participants.iter().map(|p| p.id.clone()).collect();
    let assignments = assign::generate_assignments(rng, &participant_ids, &team.exclusions)
        .map_err(|failure| failure.to_string())?;

    team.assignments = assignments;
    team.draw_complete = true;
    team.is_locked = true;
    Ok(())
}
