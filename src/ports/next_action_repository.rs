//! Next action repository port (write side).
//!
//! Actions are never deleted; completion is an update of the active flag.

use async_trait::async_trait;

use crate::domain::customer::NextAction;
use crate::domain::foundation::{DomainError, NextActionId};

#[async_trait]
pub trait NextActionRepository: Send + Sync {
    /// Insert a new action.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the owning customer doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, action: &NextAction) -> Result<(), DomainError>;

    /// Persist a changed action.
    ///
    /// # Errors
    ///
    /// - `NextActionNotFound` if the action doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, action: &NextAction) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &NextActionId) -> Result<Option<NextAction>, DomainError>;
}
