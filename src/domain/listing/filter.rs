use serde::Deserialize;

use crate::domain::customer::CustomerRecord;
use crate::domain::foundation::{Rank, UserId};

/// Narrowing applied to the customer list.
///
/// Every set criterion must hold. The search text matches company names and
/// counterpart names case-insensitively by substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct CustomerFilter {
    #[serde(default, rename = "q")]
    pub search: Option<String>,
    #[serde(default)]
    pub rank: Option<Rank>,
    /// Stored status value, compared exactly.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assignee: Option<UserId>,
}

impl CustomerFilter {
    pub fn matches(&self, record: &CustomerRecord) -> bool {
        let customer = &record.customer;

        if let Some(query) = self.search_query() {
            let in_company = customer.company_name().to_lowercase().contains(&query);
            let in_counterparts = record
                .counterparts
                .iter()
                .any(|c| c.name().to_lowercase().contains(&query));
            if !in_company && !in_counterparts {
                return false;
            }
        }

        if self.rank.is_some() && customer.company_rank() != self.rank {
            return false;
        }

        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            if customer.status().map(|s| s.as_str()) != Some(status) {
                return false;
            }
        }

        if self.assignee.is_some() && customer.assignee_id() != self.assignee.as_ref() {
            return false;
        }

        true
    }

    fn search_query(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}
