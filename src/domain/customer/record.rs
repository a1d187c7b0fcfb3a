//! A customer together with the records it owns.

use serde::{Deserialize, Serialize};

use super::{Counterpart, Customer, Meeting, NextAction};

/// Read-side snapshot of one customer and its nested collections.
///
/// Collections may be partial depending on the query that produced the
/// snapshot (the dashboard fetch carries no counterparts, for example).
/// Assignees stay as ids; callers resolve them against the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub customer: Customer,
    pub counterparts: Vec<Counterpart>,
    pub next_actions: Vec<NextAction>,
    pub meetings: Vec<Meeting>,
}

impl CustomerRecord {
    /// Wraps a customer with empty collections.
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            counterparts: Vec::new(),
            next_actions: Vec::new(),
            meetings: Vec::new(),
        }
    }

    pub fn with_meetings(mut self, meetings: Vec<Meeting>) -> Self {
        self.meetings = meetings;
        self
    }

    pub fn with_next_actions(mut self, next_actions: Vec<NextAction>) -> Self {
        self.next_actions = next_actions;
        self
    }

    pub fn with_counterparts(mut self, counterparts: Vec<Counterpart>) -> Self {
        self.counterparts = counterparts;
        self
    }
}
