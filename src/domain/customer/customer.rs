//! Customer entity.
//!
//! A customer is a tracked company. Meetings, counterparts and next actions
//! belong to exactly one customer and have no lifecycle of their own.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    normalize_optional, CustomerId, DomainError, Rank, RecordDate, Timestamp, UserId,
    ValidationError,
};

use super::CustomerStatus;

/// Editable customer fields, as captured by the customer form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub company_name: String,
    pub company_rank: Option<Rank>,
    pub assignee_id: Option<UserId>,
    pub status: Option<CustomerStatus>,
    pub proposed_products: Option<String>,
    pub lead_source: Option<String>,
    pub first_contact_date: Option<RecordDate>,
    pub next_meeting_date: Option<RecordDate>,
}

impl CustomerDetails {
    /// Trims text fields and rejects a blank company name.
    fn normalized(self) -> Result<Self, ValidationError> {
        let company_name = self.company_name.trim().to_string();
        if company_name.is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        Ok(Self {
            company_name,
            proposed_products: normalize_optional(self.proposed_products),
            lead_source: normalize_optional(self.lead_source),
            ..self
        })
    }
}

/// A tracked prospective or active business account.
///
/// # Invariants
///
/// - `company_name` is non-empty after trimming
/// - every mutation stamps `updated_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: CustomerId,
    company_name: String,
    company_rank: Option<Rank>,
    assignee_id: Option<UserId>,
    status: Option<CustomerStatus>,
    proposed_products: Option<String>,
    lead_source: Option<String>,
    first_contact_date: Option<RecordDate>,
    next_meeting_date: Option<RecordDate>,
    created_at: Timestamp,
    updated_at: Option<Timestamp>,
}

impl Customer {
    /// Creates a new customer.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the company name is blank
    pub fn create(id: CustomerId, details: CustomerDetails, now: Timestamp) -> Result<Self, DomainError> {
        let details = details.normalized()?;
        Ok(Self {
            id,
            company_name: details.company_name,
            company_rank: details.company_rank,
            assignee_id: details.assignee_id,
            status: details.status,
            proposed_products: details.proposed_products,
            lead_source: details.lead_source,
            first_contact_date: details.first_contact_date,
            next_meeting_date: details.next_meeting_date,
            created_at: now,
            updated_at: Some(now),
        })
    }

    /// Reconstitute a customer from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CustomerId,
        company_name: String,
        company_rank: Option<Rank>,
        assignee_id: Option<UserId>,
        status: Option<CustomerStatus>,
        proposed_products: Option<String>,
        lead_source: Option<String>,
        first_contact_date: Option<RecordDate>,
        next_meeting_date: Option<RecordDate>,
        created_at: Timestamp,
        updated_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            company_name,
            company_rank,
            assignee_id,
            status,
            proposed_products,
            lead_source,
            first_contact_date,
            next_meeting_date,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn company_rank(&self) -> Option<Rank> {
        self.company_rank
    }

    pub fn assignee_id(&self) -> Option<&UserId> {
        self.assignee_id.as_ref()
    }

    pub fn status(&self) -> Option<&CustomerStatus> {
        self.status.as_ref()
    }

    pub fn proposed_products(&self) -> Option<&str> {
        self.proposed_products.as_deref()
    }

    pub fn lead_source(&self) -> Option<&str> {
        self.lead_source.as_deref()
    }

    pub fn first_contact_date(&self) -> Option<&RecordDate> {
        self.first_contact_date.as_ref()
    }

    pub fn next_meeting_date(&self) -> Option<&RecordDate> {
        self.next_meeting_date.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }

    /// Last update, falling back to creation when never updated.
    pub fn last_touched_at(&self) -> &Timestamp {
        self.updated_at.as_ref().unwrap_or(&self.created_at)
    }

    /// Snapshot of the editable fields.
    pub fn details(&self) -> CustomerDetails {
        CustomerDetails {
            company_name: self.company_name.clone(),
            company_rank: self.company_rank,
            assignee_id: self.assignee_id,
            status: self.status.clone(),
            proposed_products: self.proposed_products.clone(),
            lead_source: self.lead_source.clone(),
            first_contact_date: self.first_contact_date.clone(),
            next_meeting_date: self.next_meeting_date.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the editable fields and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the company name is blank; the customer is unchanged
    pub fn update(&mut self, details: CustomerDetails, now: Timestamp) -> Result<(), DomainError> {
        let details = details.normalized()?;
        self.company_name = details.company_name;
        self.company_rank = details.company_rank;
        self.assignee_id = details.assignee_id;
        self.status = details.status;
        self.proposed_products = details.proposed_products;
        self.lead_source = details.lead_source;
        self.first_contact_date = details.first_contact_date;
        self.next_meeting_date = details.next_meeting_date;
        self.updated_at = Some(now);
        Ok(())
    }
}
