//! HTTP handlers for customers, the user directory and the status enumeration.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    DeleteCustomerCommand, DeleteCustomerHandler, GetCustomerListQuery,
    GetCustomerTimelineHandler, GetCustomerTimelineQuery, ListUsersHandler, SaveCustomerCommand,
    SaveCustomerHandler,
};
use crate::application::CustomerListView;
use crate::domain::customer::CUSTOMER_STATUSES;
use crate::domain::foundation::{CustomerId, Timestamp};
use crate::domain::listing::CustomerFilter;

use crate::adapters::http::error::{error_response, parse_id, validation_response};
use super::dto::{CustomerListResponse, SaveCustomerRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CustomerHandlers {
    list_view: Arc<CustomerListView>,
    save_handler: Arc<SaveCustomerHandler>,
    delete_handler: Arc<DeleteCustomerHandler>,
    timeline_handler: Arc<GetCustomerTimelineHandler>,
    users_handler: Arc<ListUsersHandler>,
}

impl CustomerHandlers {
    pub fn new(
        list_view: Arc<CustomerListView>,
        save_handler: Arc<SaveCustomerHandler>,
        delete_handler: Arc<DeleteCustomerHandler>,
        timeline_handler: Arc<GetCustomerTimelineHandler>,
        users_handler: Arc<ListUsersHandler>,
    ) -> Self {
        Self {
            list_view,
            save_handler,
            delete_handler,
            timeline_handler,
            users_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/customers - Filtered list with derived display values
pub async fn list_customers(
    State(handlers): State<CustomerHandlers>,
    Query(filter): Query<CustomerFilter>,
) -> Response {
    let query = GetCustomerListQuery {
        filter,
        now: Timestamp::now(),
    };

    match handlers.list_view.refresh(query).await {
        Ok(result) => {
            let response = CustomerListResponse {
                list: result.list,
                users: result.users,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// POST /api/customers - Create a customer
pub async fn create_customer(
    State(handlers): State<CustomerHandlers>,
    Json(req): Json<SaveCustomerRequest>,
) -> Response {
    save(handlers, None, req).await
}

/// PUT /api/customers/:id - Replace a customer's editable fields
pub async fn update_customer(
    State(handlers): State<CustomerHandlers>,
    Path(customer_id): Path<String>,
    Json(req): Json<SaveCustomerRequest>,
) -> Response {
    let customer_id = match parse_id::<CustomerId>(&customer_id, "customer") {
        Ok(id) => id,
        Err(response) => return response,
    };
    save(handlers, Some(customer_id), req).await
}

async fn save(
    handlers: CustomerHandlers,
    customer_id: Option<CustomerId>,
    req: SaveCustomerRequest,
) -> Response {
    let details = match req.into_details() {
        Ok(details) => details,
        Err(e) => return validation_response(e),
    };

    let cmd = SaveCustomerCommand {
        customer_id,
        details,
    };

    match handlers.save_handler.handle(cmd).await {
        Ok(result) => {
            let status = if result.created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(result.customer)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// DELETE /api/customers/:id - Delete a customer and everything it owns
pub async fn delete_customer(
    State(handlers): State<CustomerHandlers>,
    Path(customer_id): Path<String>,
) -> Response {
    let customer_id = match parse_id::<CustomerId>(&customer_id, "customer") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteCustomerCommand { customer_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/customers/:id/timeline - Meetings and completed actions, newest first
pub async fn customer_timeline(
    State(handlers): State<CustomerHandlers>,
    Path(customer_id): Path<String>,
) -> Response {
    let customer_id = match parse_id::<CustomerId>(&customer_id, "customer") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .timeline_handler
        .handle(GetCustomerTimelineQuery { customer_id })
        .await
    {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/users - Sales team directory
pub async fn list_users(State(handlers): State<CustomerHandlers>) -> Response {
    match handlers.users_handler.handle().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/statuses - Pipeline status enumeration in chart order
pub async fn list_statuses() -> Response {
    (StatusCode::OK, Json(CUSTOMER_STATUSES.to_vec())).into_response()
}
