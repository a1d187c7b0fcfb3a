//! HTTP adapter for the dashboard.

mod handlers;
mod routes;

pub use handlers::DashboardHandlers;
pub use routes::dashboard_routes;
