//! HTTP routes for customer endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    create_customer, customer_timeline, delete_customer, list_customers, list_statuses,
    list_users, update_customer, CustomerHandlers,
};

/// Creates the customer router. Paths are relative to `/api`.
pub fn customer_routes(handlers: CustomerHandlers) -> Router {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/:id", put(update_customer).delete(delete_customer))
        .route("/customers/:id/timeline", get(customer_timeline))
        .route("/users", get(list_users))
        .route("/statuses", get(list_statuses))
        .with_state(handlers)
}
