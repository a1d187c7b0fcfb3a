//! Effective status: stored status after the pending → recycle staleness rule.

use crate::domain::customer::{Customer, CustomerStatus, StatusValue};
use crate::domain::foundation::{Timestamp, EMPTY_DISPLAY};

/// Whole calendar months a pending customer may sit untouched before it is
/// reported as recycle.
pub const RECYCLE_AFTER_MONTHS: i64 = 3;

/// The status a customer is reported under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EffectiveStatus {
    Stage(StatusValue),
    /// Stored text outside the enumeration, passed through verbatim.
    Unrecognized(String),
    Unset,
}

impl EffectiveStatus {
    /// Display label. Unrecognised values show as stored.
    pub fn label(&self) -> &str {
        match self {
            EffectiveStatus::Stage(value) => value.label(),
            EffectiveStatus::Unrecognized(raw) => raw,
            EffectiveStatus::Unset => EMPTY_DISPLAY,
        }
    }

    /// The enumeration member, if any.
    pub fn stage(&self) -> Option<StatusValue> {
        match self {
            EffectiveStatus::Stage(value) => Some(*value),
            _ => None,
        }
    }
}

/// Classifies a stored status for pipeline reporting.
///
/// Returns `None` for terminal statuses (won / lost): those customers are
/// left out of every pipeline aggregate.
pub fn classify(
    status: Option<&CustomerStatus>,
    last_touched_at: &Timestamp,
    now: &Timestamp,
) -> Option<EffectiveStatus> {
    match status {
        None => Some(EffectiveStatus::Unset),
        Some(CustomerStatus::Won | CustomerStatus::Lost) => None,
        Some(CustomerStatus::Pipeline(StatusValue::Pending))
            if now.whole_months_since(last_touched_at) >= RECYCLE_AFTER_MONTHS =>
        {
            Some(EffectiveStatus::Stage(StatusValue::Recycle))
        }
        Some(CustomerStatus::Pipeline(value)) => Some(EffectiveStatus::Stage(*value)),
        Some(CustomerStatus::Unrecognized(raw)) => Some(EffectiveStatus::Unrecognized(raw.clone())),
    }
}

/// Classifies a customer using its last update (or creation) time.
pub fn classify_customer(customer: &Customer, now: &Timestamp) -> Option<EffectiveStatus> {
    classify(customer.status(), customer.last_touched_at(), now)
}
