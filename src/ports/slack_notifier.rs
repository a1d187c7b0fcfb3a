//! Slack notifier port.
//!
//! Fire-and-forget delivery of a plain text message to an incoming webhook.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::settings::SlackWebhookUrl;

#[async_trait]
pub trait SlackNotifier: Send + Sync {
    /// Posts `{"text": text}` to the webhook.
    async fn post(&self, webhook: &SlackWebhookUrl, text: &str) -> Result<(), NotificationError>;
}

/// Errors that can occur while delivering a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Slack webhook is not configured")]
    NotConfigured,

    #[error("Slack rejected the message with status {status}")]
    Rejected { status: u16 },

    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for NotificationError {
    fn from(err: reqwest::Error) -> Self {
        NotificationError::Network(err.to_string())
    }
}

impl From<NotificationError> for DomainError {
    fn from(err: NotificationError) -> Self {
        let code = match err {
            NotificationError::NotConfigured => ErrorCode::SettingsError,
            _ => ErrorCode::NotificationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
