//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `kringle`.
#[derive(Debug, Parser)]
#[command(name = "kringle", version, about = "Organize Secret Santa gift exchanges")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new team and print its join token.
    Create(CreateArgs),
    /// Join an existing team using its token.
    Join {
        /// Join token shared by the organizer.
        token: String,
        /// Display name to join under.
        #[arg(long)]
        name: String,
        /// Email address for notifications.
        #[arg(long)]
        email: Option<String>,
    },
    /// Add an item to a participant's wishlist.
    Wishlist(WishlistArgs),
    /// Record or remove an exclusion rule ("giver must not draw receiver").
    Exclude {
        /// Join token of the team.
        token: String,
        /// Participant who must not be the giver.
        #[arg(long)]
        giver: String,
        /// Participant the giver must not draw.
        #[arg(long)]
        receiver: String,
        /// Record the rule in both directions.
        #[arg(long)]
        mutual: bool,
        /// Remove the rule instead of adding it.
        #[arg(long)]
        remove: bool,
    },
    /// Lock or unlock the team against new participants.
    Lock {
        /// Join token of the team.
        token: String,
        /// Unlock instead of lock.
        #[arg(long)]
        unlock: bool,
    },
    /// Run the draw and store the assignments.
    Draw {
        /// Join token of the team.
        token: String,
        /// Participant triggering the draw; defaults to the organizer.
        #[arg(long = "as")]
        as_participant: Option<String>,
        /// Email every giver their assignment afterwards.
        #[arg(long)]
        notify: bool,
    },
    /// Show a team, or one participant's view of it.
    Show {
        /// Join token of the team.
        token: String,
        /// Show this participant's view instead of the team summary.
        #[arg(long)]
        participant: Option<String>,
    },
    /// Email every giver their assignment.
    Notify {
        /// Join token of the team.
        token: String,
    },
}

/// Arguments for `kringle create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Team name.
    #[arg(long)]
    pub name: String,
    /// Organizer's display name.
    #[arg(long)]
    pub organizer: String,
    /// Event date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
    /// Company or group the team belongs to.
    #[arg(long)]
    pub company: Option<String>,
    /// Suggested gift budget.
    #[arg(long)]
    pub budget: Option<f64>,
    /// Currency for the budget.
    #[arg(long, default_value = "MYR")]
    pub currency: String,
    /// Organizer's email for notifications.
    #[arg(long)]
    pub email: Option<String>,
}

/// Arguments for `kringle wishlist`.
#[derive(Debug, Args)]
pub struct WishlistArgs {
    /// Join token of the team.
    pub token: String,
    /// Display name of the participant the item belongs to.
    #[arg(long)]
    pub participant: String,
    /// Item to add.
    #[arg(long)]
    pub add: String,
    /// Free-form description.
    #[arg(long)]
    pub description: Option<String>,
    /// Link to the item.
    #[arg(long)]
    pub link: Option<String>,
    /// Rough price range.
    #[arg(long)]
    pub price_range: Option<String>,
}
