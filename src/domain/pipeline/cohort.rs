//! Monthly cohort aggregation over the trailing window.
//!
//! Two series share the window: new meetings (each customer counted once, in
//! the month of its earliest in-window meeting) and the status distribution
//! (customers bucketed by creation month, counted under their effective
//! status label).

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::domain::customer::{CustomerRecord, CUSTOMER_STATUSES};
use crate::domain::foundation::Timestamp;

use super::{classify_customer, TrailingWindow, WINDOW_MONTHS};

const STATUS_COUNT: usize = CUSTOMER_STATUSES.len();

/// One bar of the new-meetings chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: usize,
}

/// One stacked bar of the status-distribution chart.
///
/// `counts` is indexed by position in [`CUSTOMER_STATUSES`] and always holds
/// a value for every status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMonth {
    pub month: String,
    pub counts: [usize; STATUS_COUNT],
}

impl StatusMonth {
    fn empty(month: String) -> Self {
        Self {
            month,
            counts: [0; STATUS_COUNT],
        }
    }

    /// Count for a display label; zero for labels outside the enumeration.
    pub fn count_for(&self, label: &str) -> usize {
        label_position(label).map_or(0, |i| self.counts[i])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Serialises as `{"month": "4月", "<label>": n, ...}` in enumeration order.
impl Serialize for StatusMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(STATUS_COUNT + 1))?;
        map.serialize_entry("month", &self.month)?;
        for (definition, count) in CUSTOMER_STATUSES.iter().zip(self.counts.iter()) {
            map.serialize_entry(definition.label, count)?;
        }
        map.end()
    }
}

fn label_position(label: &str) -> Option<usize> {
    CUSTOMER_STATUSES.iter().position(|def| def.label == label)
}

/// Counts customers by the month of their earliest meeting inside the window.
///
/// Terminal customers and customers without an in-window meeting contribute
/// nothing. Unparseable meeting dates are ignored.
pub fn new_meetings_series(records: &[CustomerRecord], window: &TrailingWindow) -> Vec<MonthlyCount> {
    let mut counts = [0usize; WINDOW_MONTHS];

    for record in records {
        if record.customer.status().is_some_and(|s| s.is_terminal()) {
            continue;
        }
        let earliest = record
            .meetings
            .iter()
            .filter_map(|meeting| meeting.meeting_date().parse())
            .filter(|date| window.contains(date))
            .min();
        if let Some(index) = earliest.and_then(|date| window.position_of(&date)) {
            counts[index] += 1;
        }
    }

    window
        .labels()
        .into_iter()
        .zip(counts)
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

/// Counts non-terminal customers by creation month and effective status.
///
/// Customers created outside the window are skipped, not clamped. Effective
/// statuses whose label is not in the enumeration are not counted.
pub fn status_distribution_series(
    records: &[CustomerRecord],
    window: &TrailingWindow,
    now: &Timestamp,
) -> Vec<StatusMonth> {
    let mut series: Vec<StatusMonth> = window.labels().into_iter().map(StatusMonth::empty).collect();

    for record in records {
        let customer = &record.customer;
        let Some(effective) = classify_customer(customer, now) else {
            continue;
        };
        let Some(month_index) = window.position_of(customer.created_at()) else {
            continue;
        };
        if let Some(status_index) = label_position(effective.label()) {
            series[month_index].counts[status_index] += 1;
        }
    }

    series
}

#[cfg(test)]
#[path = "cohort_test.rs"]
mod cohort_test;
