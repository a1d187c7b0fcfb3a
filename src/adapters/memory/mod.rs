//! In-memory adapters for development and tests.

mod in_memory_crm_store;

pub use in_memory_crm_store::InMemoryCrmStore;
