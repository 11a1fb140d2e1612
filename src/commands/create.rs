//! `kringle create` command.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use crate::cli::CreateArgs;
use crate::context::ServiceContext;
use crate::model::{Participant, Team};
use crate::store::TeamStore;

/// Execute the `create` command.
///
/// Generates a join token (retrying on collision with a stored team),
/// creates the team with the organizer as its first participant, and
/// prints the token to share.
///
/// # Errors
///
/// Returns an error string if the event date is invalid or the team
/// cannot be saved.
pub fn run(ctx: &ServiceContext, root: &Path, args: &CreateArgs) -> Result<(), String> {
    let event_date = parse_event_date(&args.date)?;
    let store = TeamStore::new(ctx, root);

    let mut token = ctx.token_gen.generate_token();
    while store.team_exists(&token) {
        token = ctx.token_gen.generate_token();
    }

    let organizer = Participant {
        id: ctx.id_gen.generate_id(),
        display_name: args.organizer.clone(),
        email: args.email.clone(),
        is_organizer: true,
        wishlist: Vec::new(),
    };

    let team = Team {
        id: ctx.id_gen.generate_id(),
        name: args.name.clone(),
        company_name: args.company.clone(),
        event_date,
        token: token.clone(),
        budget: args.budget,
        currency: args.currency.clone(),
        is_locked: false,
        draw_complete: false,
        created_at: ctx.clock.now(),
        participants: vec![organizer],
        exclusions: Vec::new(),
        assignments: Vec::new(),
    };

    store.save_team(&team)?;

    println!("Team '{}' created.", team.name);
    println!("Join token: {token}");
    println!("Share it with your group: kringle join {token} --name <NAME>");
    Ok(())
}

/// Parses a `YYYY-MM-DD` event date as midnight UTC.
fn parse_event_date(date: &str) -> Result<DateTime<Utc>, String> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| format!("Invalid event date {date}: {e}"))?;
    let midnight =
        day.and_hms_opt(0, 0, 0).ok_or_else(|| format!("Invalid event date {date}"))?;
    Ok(midnight.and_utc())
}
