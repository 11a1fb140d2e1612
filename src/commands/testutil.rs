//! Shared fixtures for command handler tests.

use std::path::Path;

use crate::context::ServiceContext;
use crate::model::{Participant, Team, WishlistItem};
use crate::store::TeamStore;

/// Stores a ready-made team under the given token and returns the
/// deterministic context plus the store root.
///
/// The first name becomes the organizer; every participant gets an
/// email and a one-item wishlist so draw-related commands run without
/// further setup. Seeded IDs use a `seed-` prefix so they never collide
/// with IDs the context generates later.
pub fn seeded_team(token: &str, names: &[&str]) -> (ServiceContext, &'static Path) {
    let ctx = ServiceContext::deterministic(0);
    let root = Path::new("/store");

    let participants = names
        .iter()
        .enumerate()
        .map(|(i, name)| Participant {
            id: format!("seed-{:04}", i + 1),
            display_name: (*name).to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            is_organizer: i == 0,
            wishlist: vec![WishlistItem {
                item_name: "socks".into(),
                description: None,
                link: None,
                price_range: None,
                added_at: ctx.clock.now(),
            }],
        })
        .collect();

    let team = Team {
        id: "team-1".into(),
        name: "Office Party".into(),
        company_name: None,
        event_date: "2024-12-24T00:00:00Z".parse().unwrap(),
        token: token.to_string(),
        budget: None,
        currency: "MYR".into(),
        is_locked: false,
        draw_complete: false,
        created_at: ctx.clock.now(),
        participants,
        exclusions: Vec::new(),
        assignments: Vec::new(),
    };
    TeamStore::new(&ctx, root).save_team(&team).unwrap();

    (ctx, root)
}
