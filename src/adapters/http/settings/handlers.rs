//! HTTP handlers for the Slack settings.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::application::handlers::{
    SendTestNotificationHandler, UpdateSlackWebhookCommand, UpdateSlackWebhookHandler,
};

use super::dto::{MessageResponse, SlackSettingsResponse, UpdateSlackWebhookRequest};

#[derive(Clone)]
pub struct SettingsHandlers {
    update_handler: Arc<UpdateSlackWebhookHandler>,
    test_handler: Arc<SendTestNotificationHandler>,
}

impl SettingsHandlers {
    pub fn new(
        update_handler: Arc<UpdateSlackWebhookHandler>,
        test_handler: Arc<SendTestNotificationHandler>,
    ) -> Self {
        Self {
            update_handler,
            test_handler,
        }
    }
}

/// PUT /api/settings/slack - Save or clear the webhook URL
pub async fn update_slack_webhook(
    State(handlers): State<SettingsHandlers>,
    Json(req): Json<UpdateSlackWebhookRequest>,
) -> Response {
    let cmd = UpdateSlackWebhookCommand {
        webhook_url: req.webhook_url,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(settings) => {
            let response = SlackSettingsResponse {
                configured: settings.is_slack_configured(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/settings/slack/test - Post the fixed test message
pub async fn send_test_notification(State(handlers): State<SettingsHandlers>) -> Response {
    match handlers.test_handler.handle().await {
        Ok(()) => {
            let response = MessageResponse {
                message: "Test notification sent".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}
