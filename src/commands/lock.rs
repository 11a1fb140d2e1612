//! `kringle lock` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::TeamStore;

/// Execute the `lock` command.
///
/// # Errors
///
/// Returns an error string if the token is unknown or the save fails.
pub fn run(ctx: &ServiceContext, root: &Path, token: &str, unlock: bool) -> Result<(), String> {
    let store = TeamStore::new(ctx, root);
    let mut team = store.load_team(token)?;

    team.is_locked = !unlock;
    store.save_team(&team)?;

    if team.is_locked {
        println!("Team '{}' is now locked. New participants cannot join.", team.name);
    } else {
        println!("Team '{}' is now open to new participants.", team.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testutil::seeded_team;

    #[test]
    fn lock_then_unlock_round_trips() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice"]);
        let store = TeamStore::new(&ctx, root);

        run(&ctx, root, "FESTIVE223", false).unwrap();
        assert!(store.load_team("FESTIVE223").unwrap().is_locked);

        run(&ctx, root, "FESTIVE223", true).unwrap();
        assert!(!store.load_team("FESTIVE223").unwrap().is_locked);
    }
}
