//! Pipeline status enumeration.
//!
//! The order of [`CUSTOMER_STATUSES`] is significant: it is the stacking
//! order of the status-distribution chart and the order of its legend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stages a customer can be reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusValue {
    Approach,
    Appointment,
    MeetingDone,
    Proposal,
    Recycle,
    Pending,
}

/// One entry of the status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDefinition {
    pub value: StatusValue,
    pub label: &'static str,
    /// Hex colour used by charts.
    pub color: &'static str,
}

pub const CUSTOMER_STATUSES: [StatusDefinition; 6] = [
    StatusDefinition {
        value: StatusValue::Approach,
        label: "アプローチ中",
        color: "#86efac",
    },
    StatusDefinition {
        value: StatusValue::Appointment,
        label: "初回アポ取得済",
        color: "#34d399",
    },
    StatusDefinition {
        value: StatusValue::MeetingDone,
        label: "初回面談実施済",
        color: "#10b981",
    },
    StatusDefinition {
        value: StatusValue::Proposal,
        label: "提案中",
        color: "#047857",
    },
    StatusDefinition {
        value: StatusValue::Recycle,
        label: "リサイクル対象",
        color: "#f97316",
    },
    StatusDefinition {
        value: StatusValue::Pending,
        label: "見送り",
        color: "#4b5563",
    },
];

impl StatusValue {
    /// Stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusValue::Approach => "approach",
            StatusValue::Appointment => "appointment",
            StatusValue::MeetingDone => "meeting_done",
            StatusValue::Proposal => "proposal",
            StatusValue::Recycle => "recycle",
            StatusValue::Pending => "pending",
        }
    }

    /// Looks up a stored value.
    pub fn from_stored(raw: &str) -> Option<Self> {
        CUSTOMER_STATUSES
            .iter()
            .map(|def| def.value)
            .find(|value| value.as_str() == raw)
    }

    pub fn definition(&self) -> &'static StatusDefinition {
        &CUSTOMER_STATUSES[self.position()]
    }

    /// Index into [`CUSTOMER_STATUSES`].
    pub fn position(&self) -> usize {
        match self {
            StatusValue::Approach => 0,
            StatusValue::Appointment => 1,
            StatusValue::MeetingDone => 2,
            StatusValue::Proposal => 3,
            StatusValue::Recycle => 4,
            StatusValue::Pending => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        self.definition().label
    }

    pub fn color(&self) -> &'static str {
        self.definition().color
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const WON: &str = "won";
const LOST: &str = "lost";
const WON_LABEL: &str = "受注";
const LOST_LABEL: &str = "失注";

/// A customer's stored status.
///
/// Terminal outcomes (won / lost) sit outside the pipeline enumeration.
/// Values nobody recognises are carried verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerStatus {
    Pipeline(StatusValue),
    Won,
    Lost,
    Unrecognized(String),
}

impl CustomerStatus {
    /// Interprets stored text. The Japanese outcome labels are accepted as
    /// aliases for `won` and `lost`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(value) = StatusValue::from_stored(raw) {
            return CustomerStatus::Pipeline(value);
        }
        match raw {
            WON | WON_LABEL => CustomerStatus::Won,
            LOST | LOST_LABEL => CustomerStatus::Lost,
            other => CustomerStatus::Unrecognized(other.to_string()),
        }
    }

    /// Stored representation.
    pub fn as_str(&self) -> &str {
        match self {
            CustomerStatus::Pipeline(value) => value.as_str(),
            CustomerStatus::Won => WON,
            CustomerStatus::Lost => LOST,
            CustomerStatus::Unrecognized(raw) => raw,
        }
    }

    /// Won and lost customers are excluded from pipeline reporting.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CustomerStatus::Won | CustomerStatus::Lost)
    }

    /// Display label; unrecognised values show as stored.
    pub fn label(&self) -> &str {
        match self {
            CustomerStatus::Pipeline(value) => value.label(),
            CustomerStatus::Won => WON_LABEL,
            CustomerStatus::Lost => LOST_LABEL,
            CustomerStatus::Unrecognized(raw) => raw,
        }
    }
}

impl From<StatusValue> for CustomerStatus {
    fn from(value: StatusValue) -> Self {
        CustomerStatus::Pipeline(value)
    }
}

impl From<String> for CustomerStatus {
    fn from(raw: String) -> Self {
        CustomerStatus::parse(&raw)
    }
}

impl From<CustomerStatus> for String {
    fn from(status: CustomerStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
