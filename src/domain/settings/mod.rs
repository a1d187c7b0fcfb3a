//! Process-wide CRM settings.
//!
//! Currently only the Slack incoming-webhook URL. The URL is a credential,
//! so it is held as a `SecretString` and never printed.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Every Slack incoming-webhook URL starts with this.
pub const SLACK_WEBHOOK_PREFIX: &str = "https://hooks.slack.com/";

/// Message posted by the "send test notification" action.
pub const TEST_NOTIFICATION_TEXT: &str =
    "🚀 Boost CRM test notification\n\nSlack integration is working!";

/// A validated Slack incoming-webhook URL.
#[derive(Clone)]
pub struct SlackWebhookUrl(SecretString);

impl SlackWebhookUrl {
    /// Validates user input.
    ///
    /// Blank input means "no webhook" and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the text does not start with [`SLACK_WEBHOOK_PREFIX`]
    pub fn parse(text: &str) -> Result<Option<Self>, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if !text.starts_with(SLACK_WEBHOOK_PREFIX) {
            return Err(ValidationError::invalid_format(
                "webhook_url",
                format!("must start with {}", SLACK_WEBHOOK_PREFIX),
            ));
        }
        Ok(Some(Self(SecretString::new(text.to_string()))))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl PartialEq for SlackWebhookUrl {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for SlackWebhookUrl {}

impl fmt::Debug for SlackWebhookUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SlackWebhookUrl([REDACTED])")
    }
}

/// Settings persisted across restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrmSettings {
    pub slack_webhook_url: Option<SlackWebhookUrl>,
}

impl CrmSettings {
    pub fn is_slack_configured(&self) -> bool {
        self.slack_webhook_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slack_hook_urls() {
        let url = SlackWebhookUrl::parse(" https://hooks.slack.com/services/T/B/X ")
            .unwrap()
            .unwrap();
        assert_eq!(url.expose(), "https://hooks.slack.com/services/T/B/X");
    }

    #[test]
    fn blank_clears_the_setting() {
        assert_eq!(SlackWebhookUrl::parse("   ").unwrap(), None);
    }

    #[test]
    fn rejects_other_urls() {
        let err = SlackWebhookUrl::parse("https://example.com/hook").unwrap_err();
        assert_eq!(err.field(), "webhook_url");
    }

    #[test]
    fn debug_output_hides_the_url() {
        let url = SlackWebhookUrl::parse("https://hooks.slack.com/services/T/B/X")
            .unwrap()
            .unwrap();
        assert!(!format!("{:?}", url).contains("services"));
    }
}
