//! HTTP handlers for the records a customer owns.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, parse_id, validation_response};
use crate::application::handlers::{
    AddCounterpartCommand, AddCounterpartHandler, AddNextActionCommand, AddNextActionHandler,
    CompleteNextActionCommand, CompleteNextActionHandler, DeleteMeetingCommand,
    DeleteMeetingHandler, EditMeetingCommand, EditMeetingHandler, RecordMeetingCommand,
    RecordMeetingHandler, RemoveCounterpartCommand, RemoveCounterpartHandler,
};
use crate::domain::foundation::{CounterpartId, CustomerId, MeetingId, NextActionId};

use super::dto::{CounterpartRequest, MeetingRequest, NextActionRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct EngagementHandlers {
    pub record_meeting: Arc<RecordMeetingHandler>,
    pub edit_meeting: Arc<EditMeetingHandler>,
    pub delete_meeting: Arc<DeleteMeetingHandler>,
    pub add_counterpart: Arc<AddCounterpartHandler>,
    pub remove_counterpart: Arc<RemoveCounterpartHandler>,
    pub add_next_action: Arc<AddNextActionHandler>,
    pub complete_next_action: Arc<CompleteNextActionHandler>,
}

// ════════════════════════════════════════════════════════════════════════════
// Meetings
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/customers/:id/meetings - Record a meeting
pub async fn record_meeting(
    State(handlers): State<EngagementHandlers>,
    Path(customer_id): Path<String>,
    Json(req): Json<MeetingRequest>,
) -> Response {
    let customer_id = match parse_id::<CustomerId>(&customer_id, "customer") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RecordMeetingCommand {
        customer_id,
        details: req.into(),
    };

    match handlers.record_meeting.handle(cmd).await {
        Ok(meeting) => (StatusCode::CREATED, Json(meeting)).into_response(),
        Err(e) => error_response(e),
    }
}

/// PUT /api/meetings/:id - Replace a meeting's fields
pub async fn edit_meeting(
    State(handlers): State<EngagementHandlers>,
    Path(meeting_id): Path<String>,
    Json(req): Json<MeetingRequest>,
) -> Response {
    let meeting_id = match parse_id::<MeetingId>(&meeting_id, "meeting") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = EditMeetingCommand {
        meeting_id,
        details: req.into(),
    };

    match handlers.edit_meeting.handle(cmd).await {
        Ok(meeting) => (StatusCode::OK, Json(meeting)).into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/meetings/:id
pub async fn delete_meeting(
    State(handlers): State<EngagementHandlers>,
    Path(meeting_id): Path<String>,
) -> Response {
    let meeting_id = match parse_id::<MeetingId>(&meeting_id, "meeting") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_meeting
        .handle(DeleteMeetingCommand { meeting_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Counterparts
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/customers/:id/counterparts - Add a contact person
pub async fn add_counterpart(
    State(handlers): State<EngagementHandlers>,
    Path(customer_id): Path<String>,
    Json(req): Json<CounterpartRequest>,
) -> Response {
    let customer_id = match parse_id::<CustomerId>(&customer_id, "customer") {
        Ok(id) => id,
        Err(response) => return response,
    };
    let rank = match req.parsed_rank() {
        Ok(rank) => rank,
        Err(e) => return validation_response(e),
    };

    let cmd = AddCounterpartCommand {
        customer_id,
        name: req.name,
        department: req.department,
        position: req.position,
        rank,
    };

    match handlers.add_counterpart.handle(cmd).await {
        Ok(counterpart) => (StatusCode::CREATED, Json(counterpart)).into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/counterparts/:id
pub async fn remove_counterpart(
    State(handlers): State<EngagementHandlers>,
    Path(counterpart_id): Path<String>,
) -> Response {
    let counterpart_id = match parse_id::<CounterpartId>(&counterpart_id, "counterpart") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .remove_counterpart
        .handle(RemoveCounterpartCommand { counterpart_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Next actions
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/customers/:id/next-actions - Schedule a follow-up
pub async fn add_next_action(
    State(handlers): State<EngagementHandlers>,
    Path(customer_id): Path<String>,
    Json(req): Json<NextActionRequest>,
) -> Response {
    let customer_id = match parse_id::<CustomerId>(&customer_id, "customer") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddNextActionCommand {
        customer_id,
        content: req.content,
        due_date: req.due_date,
        assignee_id: req.assignee_id,
    };

    match handlers.add_next_action.handle(cmd).await {
        Ok(action) => (StatusCode::CREATED, Json(action)).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/next-actions/:id/complete - Mark a follow-up done
pub async fn complete_next_action(
    State(handlers): State<EngagementHandlers>,
    Path(next_action_id): Path<String>,
) -> Response {
    let next_action_id = match parse_id::<NextActionId>(&next_action_id, "next action") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .complete_next_action
        .handle(CompleteNextActionCommand { next_action_id })
        .await
    {
        Ok(action) => (StatusCode::OK, Json(action)).into_response(),
        Err(e) => error_response(e),
    }
}
