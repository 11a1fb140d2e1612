//! Mailer port for participant notifications.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`Mailer`] to keep the trait dyn-compatible.
pub type SendFuture<'a> =
    Pin<Box<dyn Future<Output = Result<(), Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A single outbound email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Sends emails to participants.
pub trait Mailer: Send + Sync {
    /// Sends a single email.
    ///
    /// # Errors
    ///
    /// Returns an error if the send fails (network, auth, rate-limit, etc.).
    fn send(&self, message: &EmailMessage) -> SendFuture<'_>;
}
