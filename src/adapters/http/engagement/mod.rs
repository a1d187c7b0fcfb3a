//! HTTP adapter for meetings, counterparts and next actions.

mod dto;
mod handlers;
mod routes;

pub use dto::{CounterpartRequest, MeetingRequest, NextActionRequest};
pub use handlers::EngagementHandlers;
pub use routes::engagement_routes;
