//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod customer_list_view;
pub mod handlers;
pub mod latest_only;

pub use customer_list_view::CustomerListView;
pub use latest_only::{LatestOnly, RequestToken};
