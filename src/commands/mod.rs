//! Command dispatch and handlers.

pub mod create;
pub mod draw;
pub mod exclude;
pub mod join;
pub mod lock;
pub mod notify;
pub mod show;
pub mod wishlist;

#[cfg(test)]
pub(crate) mod testutil;

use std::env;
use std::path::{Path, PathBuf};

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// The store root comes from `KRINGLE_STORE`, defaulting to `.kringle`
/// in the working directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx, &store_root())
}

/// Dispatch a command with the given service context and store root.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    root: &Path,
) -> Result<(), String> {
    match command {
        Command::Create(args) => create::run(ctx, root, args),
        Command::Join { token, name, email } => {
            join::run(ctx, root, token, name, email.as_deref())
        }
        Command::Wishlist(args) => wishlist::run(ctx, root, args),
        Command::Exclude { token, giver, receiver, mutual, remove } => {
            exclude::run(ctx, root, token, giver, receiver, *mutual, *remove)
        }
        Command::Lock { token, unlock } => lock::run(ctx, root, token, *unlock),
        Command::Draw { token, as_participant, notify } => {
            draw::run(ctx, root, token, as_participant.as_deref(), *notify)
        }
        Command::Show { token, participant } => {
            show::run(ctx, root, token, participant.as_deref())
        }
        Command::Notify { token } => notify::run(ctx, root, token),
    }
}

fn store_root() -> PathBuf {
    env::var("KRINGLE_STORE").map_or_else(|_| PathBuf::from(".kringle"), PathBuf::from)
}
