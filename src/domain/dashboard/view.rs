use serde::Serialize;

use crate::domain::customer::{CustomerRecord, CUSTOMER_STATUSES};
use crate::domain::foundation::Timestamp;
use crate::domain::pipeline::{
    new_meetings_series, status_distribution_series, MonthlyCount, StatusMonth, TrailingWindow,
};

/// One legend item of the status chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Both dashboard charts, computed from one fetch at one instant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Axis labels, oldest month first.
    pub months: Vec<String>,
    pub new_meetings: Vec<MonthlyCount>,
    pub status_distribution: Vec<StatusMonth>,
    /// Stacking order of the status chart.
    pub legend: Vec<LegendEntry>,
    pub generated_at: Timestamp,
}

impl DashboardView {
    pub fn build(records: &[CustomerRecord], now: &Timestamp) -> Self {
        let window = TrailingWindow::ending_at(now);
        Self {
            months: window.labels(),
            new_meetings: new_meetings_series(records, &window),
            status_distribution: status_distribution_series(records, &window, now),
            legend: CUSTOMER_STATUSES
                .iter()
                .map(|def| LegendEntry {
                    label: def.label,
                    color: def.color,
                })
                .collect(),
            generated_at: *now,
        }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
