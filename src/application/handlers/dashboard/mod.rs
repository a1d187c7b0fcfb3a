//! Dashboard query handlers.

mod get_dashboard;

pub use get_dashboard::{GetDashboardHandler, GetDashboardQuery};
