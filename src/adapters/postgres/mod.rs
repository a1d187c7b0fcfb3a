//! PostgreSQL adapters - sqlx implementations of the persistence ports.
//!
//! - `PostgresCustomerReader` - Snapshot queries with nested records
//! - `PostgresCustomerRepository` - Customer writes
//! - `PostgresMeetingRepository`, `PostgresCounterpartRepository`,
//!   `PostgresNextActionRepository` - Owned record writes
//!
//! Columns follow the camelCase schema in `migrations/`.

mod customer_reader;
mod customer_repository;
mod engagement_repository;
mod rows;

pub use customer_reader::PostgresCustomerReader;
pub use customer_repository::PostgresCustomerRepository;
pub use engagement_repository::{
    PostgresCounterpartRepository, PostgresMeetingRepository, PostgresNextActionRepository,
};
