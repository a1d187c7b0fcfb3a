//! GetCustomerTimelineHandler - Query handler for a customer's history.

use std::sync::Arc;

use crate::domain::activity::{build_timeline, TimelineEntry};
use crate::domain::foundation::{CustomerId, DomainError, ErrorCode};
use crate::ports::CustomerReader;

#[derive(Debug, Clone)]
pub struct GetCustomerTimelineQuery {
    pub customer_id: CustomerId,
}

pub struct GetCustomerTimelineHandler {
    reader: Arc<dyn CustomerReader>,
}

impl GetCustomerTimelineHandler {
    pub fn new(reader: Arc<dyn CustomerReader>) -> Self {
        Self { reader }
    }

    /// Meetings and completed actions, newest first.
    pub async fn handle(
        &self,
        query: GetCustomerTimelineQuery,
    ) -> Result<Vec<TimelineEntry>, DomainError> {
        let record = self
            .reader
            .find_customer(&query.customer_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CustomerNotFound,
                    format!("Customer not found: {}", query.customer_id),
                )
            })?;
        Ok(build_timeline(&record.meetings, &record.next_actions))
    }
}
