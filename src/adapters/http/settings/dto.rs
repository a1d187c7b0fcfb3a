//! Request and response bodies for settings endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlackWebhookRequest {
    /// Blank clears the webhook.
    #[serde(default)]
    pub webhook_url: String,
}

/// Never echoes the URL itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackSettingsResponse {
    pub configured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
