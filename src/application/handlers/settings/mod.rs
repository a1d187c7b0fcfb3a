//! Settings command handlers.

mod send_test_notification;
mod update_slack_webhook;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::settings::CrmSettings;

pub use send_test_notification::SendTestNotificationHandler;
pub use update_slack_webhook::{UpdateSlackWebhookCommand, UpdateSlackWebhookHandler};

/// Process-wide settings, loaded at startup and replaced on save.
pub type SharedSettings = Arc<RwLock<CrmSettings>>;
