//! SendTestNotificationHandler - Posts a fixed message to the configured webhook.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::DomainError;
use crate::domain::settings::TEST_NOTIFICATION_TEXT;
use crate::ports::{NotificationError, SlackNotifier};

use super::SharedSettings;

pub struct SendTestNotificationHandler {
    notifier: Arc<dyn SlackNotifier>,
    settings: SharedSettings,
}

impl SendTestNotificationHandler {
    pub fn new(notifier: Arc<dyn SlackNotifier>, settings: SharedSettings) -> Self {
        Self { notifier, settings }
    }

    pub async fn handle(&self) -> Result<(), DomainError> {
        let webhook = self
            .settings
            .read()
            .await
            .slack_webhook_url
            .clone()
            .ok_or(NotificationError::NotConfigured)?;

        if let Err(err) = self.notifier.post(&webhook, TEST_NOTIFICATION_TEXT).await {
            warn!(error = %err, "Slack test notification failed");
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::settings::{CrmSettings, SlackWebhookUrl};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::RwLock;

    struct MockNotifier {
        sent: Mutex<Vec<(String, String)>>,
        reject_with: Option<u16>,
    }

    impl MockNotifier {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                reject_with: None,
            }
        }
    }

    #[async_trait]
    impl SlackNotifier for MockNotifier {
        async fn post(&self, webhook: &SlackWebhookUrl, text: &str) -> Result<(), NotificationError> {
            if let Some(status) = self.reject_with {
                return Err(NotificationError::Rejected { status });
            }
            self.sent
                .lock()
                .unwrap()
                .push((webhook.expose().to_string(), text.to_string()));
            Ok(())
        }
    }

    fn configured() -> SharedSettings {
        let url = SlackWebhookUrl::parse("https://hooks.slack.com/services/T/B/X").unwrap();
        Arc::new(RwLock::new(CrmSettings {
            slack_webhook_url: url,
        }))
    }

    #[tokio::test]
    async fn posts_fixed_message_to_configured_url() {
        let notifier = Arc::new(MockNotifier::new());
        SendTestNotificationHandler::new(notifier.clone(), configured())
            .handle()
            .await
            .unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent[0].0, "https://hooks.slack.com/services/T/B/X");
        assert_eq!(sent[0].1, TEST_NOTIFICATION_TEXT);
    }

    #[tokio::test]
    async fn unconfigured_webhook_is_a_settings_error() {
        let settings = Arc::new(RwLock::new(CrmSettings::default()));
        let err = SendTestNotificationHandler::new(Arc::new(MockNotifier::new()), settings)
            .handle()
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SettingsError);
    }

    #[tokio::test]
    async fn rejected_delivery_is_reported() {
        let notifier = Arc::new(MockNotifier {
            sent: Mutex::new(Vec::new()),
            reject_with: Some(403),
        });
        let err = SendTestNotificationHandler::new(notifier, configured())
            .handle()
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotificationFailed);
    }
}
