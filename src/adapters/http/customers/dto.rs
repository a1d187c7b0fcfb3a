//! Request and response bodies for customer endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::customer::{CustomerDetails, CustomerStatus, User};
use crate::domain::foundation::{Rank, RecordDate, UserId, ValidationError};
use crate::domain::listing::CustomerList;

/// Body of create and update.
///
/// Empty strings in optional fields mean "unset".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCustomerRequest {
    pub company_name: String,
    #[serde(default)]
    pub company_rank: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<UserId>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub proposed_products: Option<String>,
    #[serde(default)]
    pub lead_source: Option<String>,
    #[serde(default)]
    pub first_contact_date: Option<String>,
    #[serde(default)]
    pub next_meeting_date: Option<String>,
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

fn optional_date(field: &str, text: Option<String>) -> Result<Option<RecordDate>, ValidationError> {
    non_blank(text).map(|t| RecordDate::new(field, t)).transpose()
}

impl SaveCustomerRequest {
    pub fn into_details(self) -> Result<CustomerDetails, ValidationError> {
        Ok(CustomerDetails {
            company_name: self.company_name,
            company_rank: non_blank(self.company_rank)
                .map(|r| r.parse::<Rank>())
                .transpose()?,
            assignee_id: self.assignee_id,
            status: non_blank(self.status).map(|s| CustomerStatus::parse(&s)),
            proposed_products: self.proposed_products,
            lead_source: self.lead_source,
            first_contact_date: optional_date("first_contact_date", self.first_contact_date)?,
            next_meeting_date: optional_date("next_meeting_date", self.next_meeting_date)?,
        })
    }
}

/// List payload: rows with counts, plus the directory for the assignee filter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListResponse {
    #[serde(flatten)]
    pub list: CustomerList,
    pub users: Vec<User>,
}
