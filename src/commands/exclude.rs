//! `kringle exclude` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::model::Exclusion;
use crate::store::TeamStore;

/// Execute the `exclude` command.
///
/// Records the directional rule "giver must not draw receiver";
/// `mutual` records both directions, `remove` deletes instead.
///
/// # Errors
///
/// Returns an error string if the token or either participant is
/// unknown, the participants are the same person, the rule already
/// exists (on add) or does not exist (on remove), or the save fails.
pub fn run(
    ctx: &ServiceContext,
    root: &Path,
    token: &str,
    giver: &str,
    receiver: &str,
    mutual: bool,
    remove: bool,
) -> Result<(), String> {
    let store = TeamStore::new(ctx, root);
    let mut team = store.load_team(token)?;

    let giver_id = team
        .participant_by_name(giver)
        .ok_or_else(|| format!("Participant {giver} not found"))?
        .id
        .clone();
    let receiver_id = team
        .participant_by_name(receiver)
        .ok_or_else(|| format!("Participant {receiver} not found"))?
        .id
        .clone();
    if giver_id == receiver_id {
        return Err("A participant cannot exclude themselves".to_string());
    }

    let mut pairs = vec![(giver_id.clone(), receiver_id.clone())];
    if mutual {
        pairs.push((receiver_id, giver_id));
    }

    if remove {
        let before = team.exclusions.len();
        team.exclusions.retain(|e| {
            !pairs.iter().any(|(a, b)| e.excluder_id == *a && e.excluded_id == *b)
        });
        if team.exclusions.len() == before {
            return Err(format!("No exclusion {giver} -> {receiver} is recorded"));
        }
    } else {
        let mut added = 0;
        for (excluder_id, excluded_id) in pairs {
            if team.has_exclusion(&excluder_id, &excluded_id) {
                continue;
            }
            team.exclusions.push(Exclusion { excluder_id, excluded_id });
            added += 1;
        }
        if added == 0 {
            return Err("Exclusion already exists".to_string());
        }
    }

    store.save_team(&team)?;
    let action = if remove { "removed" } else { "recorded" };
    let direction = if mutual { "<->" } else { "->" };
    println!("Exclusion {action}: {giver} {direction} {receiver}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testutil::seeded_team;

    #[test]
    fn records_a_directional_rule() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);

        run(&ctx, root, "FESTIVE223", "Alice", "Bob", false, false).unwrap();

        let team = TeamStore::new(&ctx, root).load_team("FESTIVE223").unwrap();
        assert!(team.has_exclusion("seed-0001", "seed-0002"));
        assert!(!team.has_exclusion("seed-0002", "seed-0001"));
    }

    #[test]
    fn mutual_records_both_directions() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);

        run(&ctx, root, "FESTIVE223", "Alice", "Bob", true, false).unwrap();

        let team = TeamStore::new(&ctx, root).load_team("FESTIVE223").unwrap();
        assert!(team.has_exclusion("seed-0001", "seed-0002"));
        assert!(team.has_exclusion("seed-0002", "seed-0001"));
    }

    #[test]
    fn duplicate_rule_is_rejected() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);

        run(&ctx, root, "FESTIVE223", "Alice", "Bob", false, false).unwrap();
        let result = run(&ctx, root, "FESTIVE223", "Alice", "Bob", false, false);

        assert!(result.unwrap_err().contains("already exists"));
    }

    #[test]
    fn self_exclusion_is_rejected() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob"]);

        let result = run(&ctx, root, "FESTIVE223", "Alice", "alice", false, false);
        assert!(result.unwrap_err().contains("cannot exclude themselves"));
    }

    #[test]
    fn remove_deletes_the_rule() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);
        run(&ctx, root, "FESTIVE223", "Alice", "Bob", false, false).unwrap();

        run(&ctx, root, "FESTIVE223", "Alice", "Bob", false, true).unwrap();

        let team = TeamStore::new(&ctx, root).load_team("FESTIVE223").unwrap();
        assert!(team.exclusions.is_empty());
    }

    #[test]
    fn removing_a_missing_rule_is_an_error() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob"]);

        let result = run(&ctx, root, "FESTIVE223", "Alice", "Bob", false, true);
        assert!(result.unwrap_err().contains("No exclusion"));
    }
}
