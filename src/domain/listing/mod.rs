//! Customer list view: per-row display values plus filtering.

mod filter;
mod row;

pub use filter::CustomerFilter;
pub use row::{ActionSummary, CounterpartSummary, CustomerListRow, UserDirectory};

use serde::Serialize;

use crate::domain::customer::CustomerRecord;
use crate::domain::foundation::Timestamp;

/// Filtered rows with the counts shown above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerList {
    pub rows: Vec<CustomerListRow>,
    pub filtered: usize,
    pub total: usize,
}

impl CustomerList {
    /// Builds rows for the records passing `filter`, keeping input order.
    pub fn build(
        records: &[CustomerRecord],
        directory: &UserDirectory,
        filter: &CustomerFilter,
        now: &Timestamp,
    ) -> Self {
        let rows: Vec<CustomerListRow> = records
            .iter()
            .filter(|record| filter.matches(record))
            .map(|record| CustomerListRow::build(record, directory, now))
            .collect();
        Self {
            filtered: rows.len(),
            total: records.len(),
            rows,
        }
    }
}
