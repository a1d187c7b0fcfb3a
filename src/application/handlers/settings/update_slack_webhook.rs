//! UpdateSlackWebhookHandler - Command handler for the Slack webhook setting.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::DomainError;
use crate::domain::settings::{CrmSettings, SlackWebhookUrl};
use crate::ports::SettingsStore;

use super::SharedSettings;

#[derive(Debug, Clone)]
pub struct UpdateSlackWebhookCommand {
    /// New URL; blank clears the setting.
    pub webhook_url: String,
}

/// Validates, persists, then publishes the new settings in-process.
///
/// The in-process copy changes only after the store accepted the write.
pub struct UpdateSlackWebhookHandler {
    store: Arc<dyn SettingsStore>,
    settings: SharedSettings,
}

impl UpdateSlackWebhookHandler {
    pub fn new(store: Arc<dyn SettingsStore>, settings: SharedSettings) -> Self {
        Self { store, settings }
    }

    pub async fn handle(&self, cmd: UpdateSlackWebhookCommand) -> Result<CrmSettings, DomainError> {
        let webhook = SlackWebhookUrl::parse(&cmd.webhook_url)?;

        let mut current = self.settings.write().await;
        let updated = CrmSettings {
            slack_webhook_url: webhook,
            ..current.clone()
        };
        self.store.save(&updated).await?;
        *current = updated.clone();

        info!(configured = updated.is_slack_configured(), "Slack webhook setting saved");
        Ok(updated)
    }
}
