//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers and routes;
//! [`api_router`] mounts them all under `/api`.

pub mod customers;
pub mod dashboard;
pub mod engagement;
pub mod error;
pub mod settings;

mod router;

pub use error::ErrorResponse;
pub use router::{api_router, ApiServices};
