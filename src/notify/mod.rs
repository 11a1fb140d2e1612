//! Draw-completion notifications.
//!
//! Builds one email per assignment telling the giver who they drew and
//! what that person wished for, and sends them through the `Mailer`
//! port. Individual failures never abort the batch; the summary reports
//! sent/skipped/failed counts so the command layer can surface them.

use std::fmt::Write as _;

use crate::context::ServiceContext;
use crate::model::{Participant, Team};
use crate::ports::mailer::EmailMessage;

/// Subject line for the assignment notification.
const DRAW_SUBJECT: &str = "🎁 Your Secret Santa assignment is ready!";

/// Outcome of a notification batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifySummary {
    /// Emails delivered to the mailer successfully.
    pub sent: usize,
    /// Participants skipped because they have no email on file.
    pub skipped: usize,
    /// Sends the mailer rejected.
    pub failed: usize,
}

/// Builds the assignment email for one giver.
#[must_use]
pub fn draw_completed_email(
    team: &Team,
    giver: &Participant,
    receiver: &Participant,
) -> EmailMessage {
    let to = giver.email.clone().unwrap_or_default();

    let mut html = String::new();
    let _ = write!(
        html,
        "<h1>Ho ho ho, {}!</h1>\
         <p>The draw for <strong>{}</strong> is complete.</p>\
         <p>You are the Secret Santa for <strong>{}</strong>.</p>",
        giver.display_name, team.name, receiver.display_name
    );

    if let Some(budget) = team.budget {
        let _ = write!(html, "<p>Suggested budget: {budget} {}</p>", team.currency);
    }

    if receiver.wishlist.is_empty() {
        let _ = write!(html, "<p>{} has not shared a wishlist.</p>", receiver.display_name);
    } else {
        let _ = write!(html, "<p>Their wishlist:</p><ul>");
        for item in &receiver.wishlist {
            let _ = write!(html, "<li>{}", item.item_name);
            if let Some(description) = &item.description {
                let _ = write!(html, ": {description}");
            }
            if let Some(link) = &item.link {
                let _ = write!(html, " (<a href=\"{link}\">link</a>)");
            }
            let _ = write!(html, "</li>");
        }
        let _ = write!(html, "</ul>");
    }

    let _ = write!(html, "<p>Keep it secret! 🎄</p>");

    EmailMessage { to, subject: DRAW_SUBJECT.to_string(), html }
}

/// Sends the assignment email to every giver with an email on file.
///
/// # Errors
///
/// Returns an error if the draw has not been run yet or an assignment
/// references a participant missing from the team document.
pub async fn send_draw_emails(
    ctx: &ServiceContext,
    team: &Team,
) -> Result<NotifySummary, String> {
    if !team.draw_complete {
        return Err(format!("Team {} has not completed a draw yet", team.token));
    }

    let mut summary = NotifySummary { sent: 0, skipped: 0, failed: 0 };

    for assignment in &team.assignments {
        let giver = team
            .participant(&assignment.giver_id)
            .ok_or_else(|| format!("Assignment references unknown giver {}", assignment.giver_id))?;
        let receiver = team.participant(&assignment.receiver_id).ok_or_else(|| {
            format!("Assignment references unknown receiver {}", assignment.receiver_id)
        })?;

        if giver.email.is_none() {
            summary.skipped += 1;
            continue;
        }

        let message = draw_completed_email(team, giver, receiver);
        match ctx.mailer.send(&message).await {
            Ok(()) => summary.sent += 1,
            Err(e) => {
                eprintln!("Warning: failed to email {}: {e}", message.to);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
