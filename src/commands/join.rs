//! `kringle join` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::model::Participant;
use crate::store::TeamStore;

/// Execute the `join` command.
///
/// Joining with a display name already present in the team (compared
/// case-insensitively) is treated as returning, not as a duplicate.
///
/// # Errors
///
/// Returns an error string if the token is unknown, the team is locked,
/// or the team cannot be saved.
pub fn run(
    ctx: &ServiceContext,
    root: &Path,
    token: &str,
    name: &str,
    email: Option<&str>,
) -> Result<(), String> {
    let store = TeamStore::new(ctx, root);
    let mut team = store.load_team(token)?;

    if team.is_locked {
        return Err("This team is locked. New participants cannot join.".to_string());
    }

    if let Some(existing) = team.participant_by_name(name) {
        println!("{} is already in team '{}'. Welcome back!", existing.display_name, team.name);
        return Ok(());
    }

    let participant = Participant {
        id: ctx.id_gen.generate_id(),
        display_name: name.to_string(),
        email: email.map(String::from),
        is_organizer: false,
        wishlist: Vec::new(),
    };
    team.participants.push(participant);
    store.save_team(&team)?;

    println!("{name} joined team '{}' ({} participants).", team.name, team.participants.len());
    Ok(())
}
