//! Slack adapters.

mod webhook_notifier;

pub use webhook_notifier::{SlackWebhookConfig, SlackWebhookNotifier};
