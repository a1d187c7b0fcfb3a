//! Slack notification configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::settings::SLACK_WEBHOOK_PREFIX;

/// Slack configuration
///
/// `webhook_url` seeds the setting when the settings file has none.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// Fallback incoming-webhook URL
    pub webhook_url: Option<SecretString>,

    /// JSON file holding settings saved at runtime
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,

    /// Webhook request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SlackConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate Slack configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.webhook_url {
            let url = url.expose_secret().trim();
            if !url.is_empty() && !url.starts_with(SLACK_WEBHOOK_PREFIX) {
                return Err(ValidationError::InvalidSlackWebhook(SLACK_WEBHOOK_PREFIX));
            }
        }
        if self.settings_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptySettingsPath);
        }
        Ok(())
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            settings_path: default_settings_path(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("data/settings.json")
}

fn default_timeout() -> u64 {
    10
}
