//! HTTP routes for settings.

use axum::{
    routing::{post, put},
    Router,
};

use super::handlers::{send_test_notification, update_slack_webhook, SettingsHandlers};

pub fn settings_routes(handlers: SettingsHandlers) -> Router {
    Router::new()
        .route("/settings/slack", put(update_slack_webhook))
        .route("/settings/slack/test", post(send_test_notification))
        .with_state(handlers)
}
