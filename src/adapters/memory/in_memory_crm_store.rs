//! In-Memory CRM Store Adapter
//!
//! Implements the customer reader and every repository port over shared
//! in-process tables. Deleting a customer removes its owned rows, matching
//! the cascade of the relational schema.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::customer::{Counterpart, Customer, CustomerRecord, Meeting, NextAction, User};
use crate::domain::foundation::{
    CounterpartId, CustomerId, DomainError, ErrorCode, MeetingId, NextActionId, Timestamp,
};
use crate::ports::{
    CounterpartRepository, CustomerReadError, CustomerReader, CustomerRepository,
    MeetingRepository, NextActionRepository,
};

#[derive(Debug, Default)]
struct Tables {
    customers: Vec<Customer>,
    meetings: Vec<Meeting>,
    counterparts: Vec<Counterpart>,
    next_actions: Vec<NextAction>,
    users: Vec<User>,
}

impl Tables {
    fn has_customer(&self, id: &CustomerId) -> bool {
        self.customers.iter().any(|c| c.id() == id)
    }

    fn ensure_customer(&self, id: &CustomerId) -> Result<(), DomainError> {
        if self.has_customer(id) {
            Ok(())
        } else {
            Err(customer_not_found(id))
        }
    }

    fn record(&self, customer: &Customer) -> CustomerRecord {
        let id = customer.id();
        CustomerRecord::new(customer.clone())
            .with_meetings(owned_by(&self.meetings, id, Meeting::customer_id))
            .with_counterparts(owned_by(&self.counterparts, id, Counterpart::customer_id))
            .with_next_actions(owned_by(&self.next_actions, id, NextAction::customer_id))
    }
}

fn owned_by<T: Clone>(rows: &[T], id: &CustomerId, owner: fn(&T) -> &CustomerId) -> Vec<T> {
    rows.iter().filter(|row| owner(row) == id).cloned().collect()
}

fn customer_not_found(id: &CustomerId) -> DomainError {
    DomainError::new(ErrorCode::CustomerNotFound, format!("Customer not found: {}", id))
}

/// In-memory implementation of the CRM persistence ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCrmStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCrmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a team member to the user directory.
    pub async fn add_user(&self, user: User) {
        self.tables.write().await.users.push(user);
    }

    pub async fn customer_count(&self) -> usize {
        self.tables.read().await.customers.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CustomerReader for InMemoryCrmStore {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomerReadError> {
        let tables = self.tables.read().await;
        let mut customers: Vec<&Customer> = tables.customers.iter().collect();
        customers.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(customers.into_iter().map(|c| tables.record(c)).collect())
    }

    async fn list_customers_in_range(
        &self,
        start: &Timestamp,
        end: &Timestamp,
    ) -> Result<Vec<CustomerRecord>, CustomerReadError> {
        let in_range = |ts: &Timestamp| !ts.is_before(start) && ts.is_before(end);
        let tables = self.tables.read().await;
        Ok(tables
            .customers
            .iter()
            .filter(|customer| {
                in_range(customer.created_at())
                    || tables.meetings.iter().any(|m| {
                        m.customer_id() == customer.id()
                            && m.meeting_date().parse().is_some_and(|d| in_range(&d))
                    })
            })
            .map(|customer| {
                CustomerRecord::new(customer.clone()).with_meetings(owned_by(
                    &tables.meetings,
                    customer.id(),
                    Meeting::customer_id,
                ))
            })
            .collect())
    }

    async fn find_customer(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerRecord>, CustomerReadError> {
        let tables = self.tables.read().await;
        Ok(tables
            .customers
            .iter()
            .find(|c| c.id() == id)
            .map(|c| tables.record(c)))
    }

    async fn list_users(&self) -> Result<Vec<User>, CustomerReadError> {
        let mut users = self.tables.read().await.users.clone();
        users.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(users)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repositories
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CustomerRepository for InMemoryCrmStore {
    async fn insert(&self, customer: &Customer) -> Result<(), DomainError> {
        self.tables.write().await.customers.push(customer.clone());
        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .customers
            .iter_mut()
            .find(|c| c.id() == customer.id())
            .ok_or_else(|| customer_not_found(customer.id()))?;
        *slot = customer.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.customers.iter().find(|c| c.id() == id).cloned())
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_customer(id)?;
        tables.customers.retain(|c| c.id() != id);
        tables.meetings.retain(|m| m.customer_id() != id);
        tables.counterparts.retain(|c| c.customer_id() != id);
        tables.next_actions.retain(|a| a.customer_id() != id);
        Ok(())
    }
}

#[async_trait]
impl MeetingRepository for InMemoryCrmStore {
    async fn insert(&self, meeting: &Meeting) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_customer(meeting.customer_id())?;
        tables.meetings.push(meeting.clone());
        Ok(())
    }

    async fn update(&self, meeting: &Meeting) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .meetings
            .iter_mut()
            .find(|m| m.id() == meeting.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::MeetingNotFound,
                    format!("Meeting not found: {}", meeting.id()),
                )
            })?;
        *slot = meeting.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.meetings.iter().find(|m| m.id() == id).cloned())
    }

    async fn delete(&self, id: &MeetingId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let before = tables.meetings.len();
        tables.meetings.retain(|m| m.id() != id);
        if tables.meetings.len() == before {
            return Err(DomainError::new(
                ErrorCode::MeetingNotFound,
                format!("Meeting not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CounterpartRepository for InMemoryCrmStore {
    async fn insert(&self, counterpart: &Counterpart) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_customer(counterpart.customer_id())?;
        tables.counterparts.push(counterpart.clone());
        Ok(())
    }

    async fn delete(&self, id: &CounterpartId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let before = tables.counterparts.len();
        tables.counterparts.retain(|c| c.id() != id);
        if tables.counterparts.len() == before {
            return Err(DomainError::new(
                ErrorCode::CounterpartNotFound,
                format!("Counterpart not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl NextActionRepository for InMemoryCrmStore {
    async fn insert(&self, action: &NextAction) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_customer(action.customer_id())?;
        tables.next_actions.push(action.clone());
        Ok(())
    }

    async fn update(&self, action: &NextAction) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let slot = tables
            .next_actions
            .iter_mut()
            .find(|a| a.id() == action.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::NextActionNotFound,
                    format!("Next action not found: {}", action.id()),
                )
            })?;
        *slot = action.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &NextActionId) -> Result<Option<NextAction>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.next_actions.iter().find(|a| a.id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::CustomerDetails;
    use crate::domain::foundation::{RecordDate, UserId};

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    fn customer(name: &str, created_at: Timestamp) -> Customer {
        Customer::create(
            CustomerId::new(),
            CustomerDetails {
                company_name: name.to_string(),
                ..Default::default()
            },
            created_at,
        )
        .unwrap()
    }

    fn meeting(customer_id: CustomerId, date: &str) -> Meeting {
        Meeting::reconstitute(
            MeetingId::new(),
            customer_id,
            RecordDate::from_raw(date),
            None,
            None,
            None,
            None,
        )
    }

    #[tokio::test]
    async fn lists_customers_newest_first_with_nested_records() {
        let store = InMemoryCrmStore::new();
        let old = customer("Old", ts(2024, 1, 1));
        let new = customer("New", ts(2024, 5, 1));
        CustomerRepository::insert(&store, &old).await.unwrap();
        CustomerRepository::insert(&store, &new).await.unwrap();
        MeetingRepository::insert(&store, &meeting(*old.id(), "2024-02-01"))
            .await
            .unwrap();

        let records = store.list_customers().await.unwrap();

        assert_eq!(records[0].customer.company_name(), "New");
        assert_eq!(records[1].meetings.len(), 1);
    }

    #[tokio::test]
    async fn range_query_matches_creation_or_meeting_dates() {
        let store = InMemoryCrmStore::new();
        let created_in = customer("Created", ts(2024, 3, 1));
        let met_in = customer("Met", ts(2023, 1, 1));
        let neither = customer("Neither", ts(2023, 1, 1));
        for c in [&created_in, &met_in, &neither] {
            CustomerRepository::insert(&store, c).await.unwrap();
        }
        MeetingRepository::insert(&store, &meeting(*met_in.id(), "2024-04-10"))
            .await
            .unwrap();

        let records = store
            .list_customers_in_range(&ts(2024, 1, 1), &ts(2024, 7, 1))
            .await
            .unwrap();

        let names: Vec<_> = records.iter().map(|r| r.customer.company_name()).collect();
        assert_eq!(names, vec!["Created", "Met"]);
    }

    #[tokio::test]
    async fn delete_cascades_to_owned_rows() {
        let store = InMemoryCrmStore::new();
        let c = customer("Acme", ts(2024, 1, 1));
        CustomerRepository::insert(&store, &c).await.unwrap();
        MeetingRepository::insert(&store, &meeting(*c.id(), "2024-02-01"))
            .await
            .unwrap();

        CustomerRepository::delete(&store, c.id()).await.unwrap();

        assert_eq!(store.customer_count().await, 0);
        assert!(store.find_customer(c.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn child_rows_require_an_existing_customer() {
        let store = InMemoryCrmStore::new();
        let err = MeetingRepository::insert(&store, &meeting(CustomerId::new(), "2024-02-01"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }

    #[tokio::test]
    async fn users_sorted_by_surname_and_assignee_kept_as_id() {
        let store = InMemoryCrmStore::new();
        let suzuki = User {
            id: UserId::new(),
            email: "s@example.com".to_string(),
            first_name: Some("Ichiro".to_string()),
            last_name: Some("Suzuki".to_string()),
            profile_image_url: None,
            slack_id: None,
        };
        let abe = User {
            id: UserId::new(),
            last_name: Some("Abe".to_string()),
            email: "a@example.com".to_string(),
            ..suzuki.clone()
        };
        store.add_user(suzuki.clone()).await;
        store.add_user(abe).await;

        let mut details = CustomerDetails {
            company_name: "Acme".to_string(),
            ..Default::default()
        };
        details.assignee_id = Some(suzuki.id);
        let c = Customer::create(CustomerId::new(), details, ts(2024, 1, 1)).unwrap();
        CustomerRepository::insert(&store, &c).await.unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users[0].last_name.as_deref(), Some("Abe"));

        let record = store.find_customer(c.id()).await.unwrap().unwrap();
        assert_eq!(record.customer.assignee_id(), Some(&suzuki.id));
    }
}
