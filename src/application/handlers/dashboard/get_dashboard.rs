//! GetDashboardHandler - Query handler for the dashboard charts.
//!
//! Fetches customers created or met within the trailing window and reduces
//! them into the new-meetings and status-distribution series.

use std::sync::Arc;
use tracing::debug;

use crate::domain::dashboard::DashboardView;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::pipeline::TrailingWindow;
use crate::ports::CustomerReader;

#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    /// Evaluation time; fixes the window and the recycle rule.
    pub now: Timestamp,
}

pub struct GetDashboardHandler {
    reader: Arc<dyn CustomerReader>,
}

impl GetDashboardHandler {
    pub fn new(reader: Arc<dyn CustomerReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardView, DomainError> {
        let window = TrailingWindow::ending_at(&query.now);
        let records = self
            .reader
            .list_customers_in_range(&window.start(), &window.end_exclusive())
            .await?;
        debug!(customers = records.len(), "Dashboard snapshot fetched");
        Ok(DashboardView::build(&records, &query.now))
    }
}
