//! Capturing mailer that records messages instead of sending them.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::ports::mailer::{EmailMessage, Mailer, SendFuture};

/// Mailer that captures every message into memory.
///
/// Addresses registered as failing return an error from `send`, which
/// lets tests exercise the notifier's partial-failure accounting.
pub struct CapturingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    failing: HashSet<String>,
}

impl CapturingMailer {
    /// Creates a mailer that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self { sent: Mutex::new(Vec::new()), failing: HashSet::new() }
    }

    /// Creates a mailer that rejects sends to the given addresses.
    #[must_use]
    pub fn failing_for<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: addresses.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a copy of every message captured so far.
    #[must_use]
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for CapturingMailer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mailer for CapturingMailer {
    fn send(&self, message: &EmailMessage) -> SendFuture<'_> {
        let message = message.clone();
        Box::pin(async move {
            if self.failing.contains(&message.to) {
                return Err(format!("delivery to {} refused", message.to).into());
            }
            self.sent.lock().unwrap().push(message);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_sent_messages() {
        let mailer = CapturingMailer::new();
        let message = EmailMessage {
            to: "elf@example.com".into(),
            subject: "hello".into(),
            html: "<p>hi</p>".into(),
        };

        mailer.send(&message).await.unwrap();

        assert_eq!(mailer.sent(), vec![message]);
    }

    #[tokio::test]
    async fn failing_addresses_error_and_are_not_captured() {
        let mailer = CapturingMailer::failing_for(["down@example.com"]);
        let message = EmailMessage {
            to: "down@example.com".into(),
            subject: "hello".into(),
            html: String::new(),
        };

        let result = mailer.send(&message).await;

        assert!(result.is_err());
        assert!(mailer.sent().is_empty());
    }
}
