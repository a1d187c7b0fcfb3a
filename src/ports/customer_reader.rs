//! Customer reader port (read side).
//!
//! Snapshot queries feeding the list view, the dashboard and the customer
//! history. Each query returns customers together with the nested records
//! the view needs, so derivation runs over one consistent snapshot.

use async_trait::async_trait;

use crate::domain::customer::{CustomerRecord, User};
use crate::domain::foundation::{CustomerId, DomainError, ErrorCode, Timestamp};

/// Reader port for customer snapshots.
#[async_trait]
pub trait CustomerReader: Send + Sync {
    /// All customers, newest first, with counterparts, every next action
    /// (active and completed) and meetings. Assignees are resolved by the
    /// caller through [`CustomerReader::list_users`].
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomerReadError>;

    /// Customers created in `[start, end)` or with a meeting in that range,
    /// with their meetings. Counterparts and next actions are not loaded.
    async fn list_customers_in_range(
        &self,
        start: &Timestamp,
        end: &Timestamp,
    ) -> Result<Vec<CustomerRecord>, CustomerReadError>;

    /// One customer with all nested records.
    ///
    /// Returns `None` if not found.
    async fn find_customer(&self, id: &CustomerId)
        -> Result<Option<CustomerRecord>, CustomerReadError>;

    /// The sales team ordered by surname ascending.
    async fn list_users(&self) -> Result<Vec<User>, CustomerReadError>;
}

/// Errors that can occur while reading customer snapshots.
#[derive(Debug, thiserror::Error)]
pub enum CustomerReadError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt row in {table}: {reason}")]
    CorruptRow { table: &'static str, reason: String },
}

impl From<sqlx::Error> for CustomerReadError {
    fn from(err: sqlx::Error) -> Self {
        CustomerReadError::Database(err.to_string())
    }
}

impl From<CustomerReadError> for DomainError {
    fn from(err: CustomerReadError) -> Self {
        DomainError::new(ErrorCode::DatabaseError, err.to_string())
    }
}
