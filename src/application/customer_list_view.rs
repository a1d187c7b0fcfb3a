//! CustomerListView - Customer list state shared by callers.
//!
//! Refreshes are grouped by filter. Within one filter, a refresh that
//! completes after a newer one has published answers with the newer result
//! instead of its own, so a caller never sees a list older than one already
//! served for the same query. Different filters never supersede each other.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::handlers::{CustomerListResult, GetCustomerListHandler, GetCustomerListQuery};
use crate::application::latest_only::LatestOnly;
use crate::domain::foundation::DomainError;
use crate::domain::listing::CustomerFilter;

/// Beyond this many filters, idle slots are dropped before adding a new one.
const MAX_TRACKED_FILTERS: usize = 256;

type ListSlot = Arc<LatestOnly<CustomerListResult>>;

pub struct CustomerListView {
    handler: Arc<GetCustomerListHandler>,
    slots: Mutex<HashMap<CustomerFilter, ListSlot>>,
}

impl CustomerListView {
    pub fn new(handler: Arc<GetCustomerListHandler>) -> Self {
        Self {
            handler,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Runs the query and publishes its result unless a newer refresh of the
    /// same filter started meanwhile.
    ///
    /// A superseded refresh returns the newer published result when one
    /// exists, and its own result otherwise.
    pub async fn refresh(&self, query: GetCustomerListQuery) -> Result<CustomerListResult, DomainError> {
        let slot = self.slot(&query.filter).await;
        let token = slot.issue();
        let result = self.handler.handle(query).await?;

        if slot.apply(token, result.clone()).await {
            debug!(token = token.value(), "Customer list state replaced");
            return Ok(result);
        }
        Ok(slot.newer_than(token).await.unwrap_or(result))
    }

    async fn slot(&self, filter: &CustomerFilter) -> ListSlot {
        let mut slots = self.slots.lock().await;
        if !slots.contains_key(filter) && slots.len() >= MAX_TRACKED_FILTERS {
            // Only the map holds an idle slot; in-flight refreshes hold a clone.
            slots.retain(|_, slot| Arc::strong_count(slot) > 1);
        }
        slots.entry(filter.clone()).or_default().clone()
    }
}
