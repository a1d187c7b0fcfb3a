//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `CustomerReader` - Snapshot queries for the list, dashboard and history
//! - `CustomerRepository`, `MeetingRepository`, `CounterpartRepository`,
//!   `NextActionRepository` - Single-record writes
//!
//! ## Integration Ports
//!
//! - `SlackNotifier` - Incoming-webhook delivery
//! - `SettingsStore` - Persisted process-wide settings

mod counterpart_repository;
mod customer_reader;
mod customer_repository;
mod meeting_repository;
mod next_action_repository;
mod settings_store;
mod slack_notifier;

pub use counterpart_repository::CounterpartRepository;
pub use customer_reader::{CustomerReadError, CustomerReader};
pub use customer_repository::CustomerRepository;
pub use meeting_repository::MeetingRepository;
pub use next_action_repository::NextActionRepository;
pub use settings_store::{SettingsError, SettingsStore};
pub use slack_notifier::{NotificationError, SlackNotifier};
