//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the CRM domain.

mod calendar_month;
mod errors;
mod ids;
mod rank;
mod record_date;
mod timestamp;

pub use calendar_month::CalendarMonth;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CounterpartId, CustomerId, MeetingId, NextActionId, UserId};
pub use rank::Rank;
pub use record_date::RecordDate;
pub use timestamp::Timestamp;

/// Placeholder shown wherever a value is absent.
pub const EMPTY_DISPLAY: &str = "—";

/// Trims optional free text, mapping blank input to `None`.
pub fn normalize_optional(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
