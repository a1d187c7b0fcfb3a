//! Meeting repository port (write side).

use async_trait::async_trait;

use crate::domain::customer::Meeting;
use crate::domain::foundation::{DomainError, MeetingId};

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Insert a new meeting.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the owning customer doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, meeting: &Meeting) -> Result<(), DomainError>;

    /// Replace an existing meeting's fields.
    ///
    /// # Errors
    ///
    /// - `MeetingNotFound` if the meeting doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, meeting: &Meeting) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>, DomainError>;

    /// # Errors
    ///
    /// - `MeetingNotFound` if the meeting doesn't exist
    async fn delete(&self, id: &MeetingId) -> Result<(), DomainError>;
}
