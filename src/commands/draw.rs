//! `kringle draw` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::draw;
use crate::model::Team;
use crate::store::TeamStore;

/// Execute the `draw` command.
///
/// Loads the team, runs the draw on behalf of `--as` (defaulting to
/// the organizer), saves the updated document, and prints the pairs.
/// With `--notify`, every giver with an email is mailed afterwards.
///
/// # Errors
///
/// Returns an error string if the token is unknown, a draw guard
/// fails, no valid assignment exists, or the save fails.
pub fn run(
    ctx: &ServiceContext,
    root: &Path,
    token: &str,
    as_participant: Option<&str>,
    notify: bool,
) -> Result<(), String> {
    let store = TeamStore::new(ctx, root);
    let mut team = store.load_team(token)?;

    let requester_id = match as_participant {
        Some(name) => team
            .participant_by_name(name)
            .ok_or_else(|| format!("Participant {name} not found"))?
            .id
            .clone(),
        None => team
            .organizer()
            .ok_or_else(|| format!("Team {token} has no organizer"))?
            .id
            .clone(),
    };

    draw::run_draw(ctx.rng.as_ref(), &mut team, &requester_id)?;
    store.save_team(&team)?;

    println!("Draw completed for team '{}':", team.name);
    for assignment in &team.assignments {
        println!(
            "  {} -> {}",
            display_name(&team, &assignment.giver_id),
            display_name(&team, &assignment.receiver_id)
        );
    }

    if notify {
        let summary = super::notify::notify_team(ctx, &team)?;
        println!(
            "Notifications: {} sent, {} skipped, {} failed.",
            summary.sent, summary.skipped, summary.failed
        );
    }
    Ok(())
}

fn display_name(team: &Team, id: &str) -> String {
    team.participant(id).map_or_else(|| id.to_string(), |p| p.display_name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testutil::seeded_team;

    #[test]
    fn draw_persists_assignments_and_locks_the_team() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol", "Dave"]);

        run(&ctx, root, "FESTIVE223", None, false).unwrap();

        let team = TeamStore::new(&ctx, root).load_team("FESTIVE223").unwrap();
        assert!(team.draw_complete);
        assert!(team.is_locked);
        assert_eq!(team.assignments.len(), 4);
    }

    #[test]
    fn non_organizer_cannot_trigger_via_as() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);

        let result = run(&ctx, root, "FESTIVE223", Some("Bob"), false);
        assert!(result.unwrap_err().contains("Only the organizer"));
    }

    #[test]
    fn draw_with_notify_reports_a_summary() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);

        // Every seeded participant has an email; the capturing mailer
        // accepts them all, so this exercises the full notify path.
        run(&ctx, root, "FESTIVE223", None, true).unwrap();

        let team = TeamStore::new(&ctx, root).load_team("FESTIVE223").unwrap();
        assert!(team.draw_complete);
    }
}
