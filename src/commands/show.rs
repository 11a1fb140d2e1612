//! `kringle show` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::model::Team;
use crate::store::TeamStore;

/// Execute the `show` command.
///
/// Without `--participant`, prints the team summary (the organizer
/// view); with it, prints that participant's wishlist and, once the
/// draw is complete, who they give to.
///
/// # Errors
///
/// Returns an error string if the token or participant is unknown.
pub fn run(
    ctx: &ServiceContext,
    root: &Path,
    token: &str,
    participant: Option<&str>,
) -> Result<(), String> {
    let store = TeamStore::new(ctx, root);
    let team = store.load_team(token)?;

    match participant {
        Some(name) => show_participant(&team, name),
        None => {
            show_team(&team);
            Ok(())
        }
    }
}

fn show_team(team: &Team) {
    match &team.company_name {
        Some(company) => println!("{} ({company})", team.name),
        None => println!("{}", team.name),
    }
    println!("Event date: {}", team.event_date.format("%Y-%m-%d"));
    if let Some(budget) = team.budget {
        println!("Budget: {budget} {}", team.currency);
    }
    println!("Status: {}", if team.is_locked { "locked" } else { "open" });
    println!("Draw: {}", if team.draw_complete { "complete" } else { "pending" });

    println!("Participants ({}):", team.participants.len());
    for p in &team.participants {
        let role = if p.is_organizer { " (organizer)" } else { "" };
        println!("  {}{role}, {} wishlist item(s)", p.display_name, p.wishlist.len());
    }

    if team.draw_complete {
        println!("Assignments:");
        for a in &team.assignments {
            println!(
                "  {} -> {}",
                display_name(team, &a.giver_id),
                display_name(team, &a.receiver_id)
            );
        }
    }
}

fn show_participant(team: &Team, name: &str) -> Result<(), String> {
    let participant =
        team.participant_by_name(name).ok_or_else(|| format!("Participant {name} not found"))?;

    println!("{} in team '{}'", participant.display_name, team.name);
    if participant.wishlist.is_empty() {
        println!("Wishlist: empty");
    } else {
        println!("Wishlist:");
        for item in &participant.wishlist {
            println!("  {}", item.item_name);
        }
    }

    if !team.draw_complete {
        println!("The draw has not run yet.");
        return Ok(());
    }

    match team.assignment_for(&participant.id) {
        Some(assignment) => {
            let receiver = team
                .participant(&assignment.receiver_id)
                .ok_or_else(|| "Assignment references an unknown receiver".to_string())?;
            println!("You are the Secret Santa for {}.", receiver.display_name);
            for item in &receiver.wishlist {
                println!("  wish: {}", item.item_name);
            }
        }
        None => println!("No assignment recorded for {}.", participant.display_name),
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
    fn shows_team_summary() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);
        run(&ctx, root, "FESTIVE223", None).unwrap();
    }

    #[test]
    fn shows_participant_view_after_draw() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);
        crate::commands::draw::run(&ctx, root, "FESTIVE223", None, false).unwrap();

        run(&ctx, root, "FESTIVE223", Some("Bob")).unwrap();
    }

    #[test]
    fn unknown_participant_is_an_error() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice"]);

        let result = run(&ctx, root, "FESTIVE223", Some("Mallory"));
        assert!(result.unwrap_err().contains("not found"));
    }
}
