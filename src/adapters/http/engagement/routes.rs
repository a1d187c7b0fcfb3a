//! HTTP routes for meetings, counterparts and next actions.

use axum::{
    routing::{delete, post, put},
    Router,
};

use super::handlers::{
    add_counterpart, add_next_action, complete_next_action, delete_meeting, edit_meeting,
    record_meeting, remove_counterpart, EngagementHandlers,
};

/// Creates the engagement router. Paths are relative to `/api`.
pub fn engagement_routes(handlers: EngagementHandlers) -> Router {
    Router::new()
        .route("/customers/:id/meetings", post(record_meeting))
        .route("/meetings/:id", put(edit_meeting).delete(delete_meeting))
        .route("/customers/:id/counterparts", post(add_counterpart))
        .route("/counterparts/:id", delete(remove_counterpart))
        .route("/customers/:id/next-actions", post(add_next_action))
        .route("/next-actions/:id/complete", post(complete_next_action))
        .with_state(handlers)
}
