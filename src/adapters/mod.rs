//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - In-process store for tests and local runs
//! - `postgres` - sqlx persistence
//! - `settings` - JSON settings file
//! - `slack` - Incoming-webhook notifier

pub mod http;
pub mod memory;
pub mod postgres;
pub mod settings;
pub mod slack;

pub use http::{api_router, ApiServices};
pub use memory::InMemoryCrmStore;
pub use postgres::{
    PostgresCounterpartRepository, PostgresCustomerReader, PostgresCustomerRepository,
    PostgresMeetingRepository, PostgresNextActionRepository,
};
pub use settings::JsonFileSettingsStore;
pub use slack::{SlackWebhookConfig, SlackWebhookNotifier};
