//! HTTP adapter for customer endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CustomerListResponse, SaveCustomerRequest};
pub use handlers::CustomerHandlers;
pub use routes::customer_routes;
