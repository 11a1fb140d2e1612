//! `kringle wishlist` command.

use std::path::Path;

use crate::cli::WishlistArgs;
use crate::context::ServiceContext;
use crate::model::{WishlistItem, MAX_WISHLIST_ITEMS};
use crate::store::TeamStore;

/// Execute the `wishlist` command.
///
/// # Errors
///
/// Returns an error string if the token or participant is unknown, the
/// participant already has the maximum number of items, or the team
/// cannot be saved.
pub fn run(ctx: &ServiceContext, root: &Path, args: &WishlistArgs) -> Result<(), String> {
    let store = TeamStore::new(ctx, root);
    let mut team = store.load_team(&args.token)?;

    let item = WishlistItem {
        item_name: args.add.clone(),
        description: args.description.clone(),
        link: args.link.clone(),
        price_range: args.price_range.clone(),
        added_at: ctx.clock.now(),
    };

    let count = {
        let participant = team
            .participant_by_name_mut(&args.participant)
            .ok_or_else(|| format!("Participant {} not found", args.participant))?;
        if participant.wishlist.len() >= MAX_WISHLIST_ITEMS {
            return Err(format!("Maximum {MAX_WISHLIST_ITEMS} wishlist items allowed"));
        }
        participant.wishlist.push(item);
        participant.wishlist.len()
    };
    store.save_team(&team)?;

    println!(
        "Added '{}' to {}'s wishlist ({count}/{MAX_WISHLIST_ITEMS} items).",
        args.add, args.participant
    );
    Ok(())
}
