//! Live adapter for the `Mailer` port using the Resend email API.

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ports::mailer::{EmailMessage, Mailer, SendFuture};

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_FROM: &str = "Secret Santa <onboarding@resend.dev>";

/// Live mailer that sends through the Resend HTTP API.
pub struct ResendMailer {
    client: Client,
}

impl ResendMailer {
    /// Creates a new live mailer.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for ResendMailer {
    fn default() -> Self {
        Self::new()
    }
}

/// Request body sent to the Resend emails endpoint.
#[derive(Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

/// Error response from the Resend API.
#[derive(Deserialize)]
struct ResendError {
    message: String,
}

impl Mailer for ResendMailer {
    fn send(&self, message: &EmailMessage) -> SendFuture<'_> {
        let message = message.clone();

        Box::pin(async move {
            let api_key = env::var("RESEND_API_KEY").map_err(|_| {
                Box::<dyn std::error::Error + Send + Sync>::from(
                    "RESEND_API_KEY environment variable not set",
                )
            })?;
            let from = env::var("RESEND_FROM_EMAIL").unwrap_or_else(|_| DEFAULT_FROM.to_string());

            let body = ResendRequest {
                from: &from,
                to: vec![&message.to],
                subject: &message.subject,
                html: &message.html,
            };

            let response = self
                .client
                .post(RESEND_API_URL)
                .bearer_auth(&api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Resend API request failed: {e}").into()
                })?;

            let status = response.status();
            if !status.is_success() {
                let response_text = response.text().await.map_err(
                    |e| -> Box<dyn std::error::Error + Send + Sync> {
                        format!("Failed to read Resend API response: {e}").into()
                    },
                )?;
                let msg = serde_json::from_str::<ResendError>(&response_text)
                    .map(|e| e.message)
                    .unwrap_or(response_text);
                return Err(format!("Resend API error ({}): {msg}", status.as_u16()).into());
            }

            Ok(())
        })
    }
}
