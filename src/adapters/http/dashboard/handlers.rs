//! HTTP handler for the dashboard charts.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::application::handlers::{GetDashboardHandler, GetDashboardQuery};
use crate::domain::foundation::Timestamp;

#[derive(Clone)]
pub struct DashboardHandlers {
    get_handler: Arc<GetDashboardHandler>,
}

impl DashboardHandlers {
    pub fn new(get_handler: Arc<GetDashboardHandler>) -> Self {
        Self { get_handler }
    }
}

/// GET /api/dashboard - New-meeting and status-distribution series
pub async fn get_dashboard(State(handlers): State<DashboardHandlers>) -> Response {
    let query = GetDashboardQuery {
        now: Timestamp::now(),
    };

    match handlers.get_handler.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => error_response(e),
    }
}
