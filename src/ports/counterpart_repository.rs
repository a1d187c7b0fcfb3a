//! Counterpart repository port (write side).

use async_trait::async_trait;

use crate::domain::customer::Counterpart;
use crate::domain::foundation::{CounterpartId, DomainError};

#[async_trait]
pub trait CounterpartRepository: Send + Sync {
    /// Insert a new counterpart.
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if the owning customer doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, counterpart: &Counterpart) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `CounterpartNotFound` if the counterpart doesn't exist
    async fn delete(&self, id: &CounterpartId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CounterpartRepository) {}
    }
}
