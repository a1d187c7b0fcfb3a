//! Customer repository port (write side).

use async_trait::async_trait;

use crate::domain::customer::Customer;
use crate::domain::foundation::{CustomerId, DomainError};

/// Repository port for customer rows.
///
/// Deleting a customer removes its meetings, counterparts and next actions
/// with it.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, customer: &Customer) -> Result<(), DomainError>;

    /// Replace an existing customer's fields.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the customer doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, customer: &Customer) -> Result<(), DomainError>;

    /// Find a customer by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Delete a customer and everything it owns.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the customer doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &CustomerId) -> Result<(), DomainError>;
}
