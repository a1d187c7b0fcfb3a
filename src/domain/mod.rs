//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `customer` - Customers and the records they own, status enumeration
//! - `activity` - Activity facts, recency, deadlines, history timeline
//! - `pipeline` - Effective status classification and monthly cohorts
//! - `listing` - Customer list rows and filtering
//! - `dashboard` - Dashboard chart view
//! - `settings` - Slack webhook settings

pub mod activity;
pub mod customer;
pub mod dashboard;
pub mod foundation;
pub mod listing;
pub mod pipeline;
pub mod settings;
