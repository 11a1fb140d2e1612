//! `kringle notify` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::model::Team;
use crate::notify::{self, NotifySummary};
use crate::store::TeamStore;

/// Execute the `notify` command.
///
/// # Errors
///
/// Returns an error string if the token is unknown, the draw has not
/// run, or the async runtime cannot start.
pub fn run(ctx: &ServiceContext, root: &Path, token: &str) -> Result<(), String> {
    let store = TeamStore::new(ctx, root);
    let team = store.load_team(token)?;

    let summary = notify_team(ctx, &team)?;
    println!(
        "Notifications: {} sent, {} skipped, {} failed.",
        summary.sent, summary.skipped, summary.failed
    );
    Ok(())
}

/// Drives the async notifier to completion on a current-thread runtime.
///
/// # Errors
///
/// Returns an error string if the runtime cannot start or the notifier
/// refuses (no completed draw, broken assignment references).
pub(crate) fn notify_team(ctx: &ServiceContext, team: &Team) -> Result<NotifySummary, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    runtime.block_on(notify::send_draw_emails(ctx, team))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testutil::seeded_team;

    #[test]
    fn refuses_before_the_draw() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);

        let result = run(&ctx, root, "FESTIVE223");
        assert!(result.unwrap_err().contains("has not completed a draw"));
    }

    #[test]
    fn notifies_after_a_draw() {
        let (ctx, root) = seeded_team("FESTIVE223", &["Alice", "Bob", "Carol"]);
        crate::commands::draw::run(&ctx, root, "FESTIVE223", None, false).unwrap();

        run(&ctx, root, "FESTIVE223").unwrap();
    }
}
