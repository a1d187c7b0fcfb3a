//! Slack incoming-webhook implementation of SlackNotifier.
//!
//! Posts `{"text": ...}` as JSON. Slack answers `200 ok` on success; any
//! other status means the message was not delivered.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::settings::SlackWebhookUrl;
use crate::ports::{NotificationError, SlackNotifier};

/// Configuration for the webhook notifier.
#[derive(Debug, Clone)]
pub struct SlackWebhookConfig {
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for SlackWebhookConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Incoming-webhook notifier.
#[derive(Clone)]
pub struct SlackWebhookNotifier {
    client: Client,
}

impl SlackWebhookNotifier {
    /// Creates a notifier with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(config: SlackWebhookConfig) -> Result<Self, NotificationError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client })
    }
}

fn check_status(status: StatusCode) -> Result<(), NotificationError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(NotificationError::Rejected {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl SlackNotifier for SlackWebhookNotifier {
    async fn post(&self, webhook: &SlackWebhookUrl, text: &str) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(webhook.expose())
            .json(&WebhookPayload { text })
            .send()
            .await?;

        let status = response.status();
        if let Err(err) = check_status(status) {
            warn!(status = %status, "Slack webhook rejected message");
            return Err(err);
        }
        debug!("Slack message delivered");
        Ok(())
    }
}
