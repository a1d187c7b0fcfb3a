//! GetCustomerListHandler - Query handler for the customer list view.
//!
//! Fetches the customer snapshot and the user directory concurrently, then
//! derives every row's display values at one evaluation instant.

use std::sync::Arc;
use tracing::debug;

use crate::domain::customer::User;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::listing::{CustomerFilter, CustomerList, UserDirectory};
use crate::ports::CustomerReader;

#[derive(Debug, Clone)]
pub struct GetCustomerListQuery {
    pub filter: CustomerFilter,
    /// Evaluation time for recency and deadlines.
    pub now: Timestamp,
}

/// The list plus the directory used for the assignee filter.
#[derive(Debug, Clone)]
pub struct CustomerListResult {
    pub list: CustomerList,
    pub users: Vec<User>,
}

pub struct GetCustomerListHandler {
    reader: Arc<dyn CustomerReader>,
}

impl GetCustomerListHandler {
    pub fn new(reader: Arc<dyn CustomerReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetCustomerListQuery) -> Result<CustomerListResult, DomainError> {
        let (records, users) =
            tokio::try_join!(self.reader.list_customers(), self.reader.list_users())?;

        let directory = UserDirectory::new(users);
        let list = CustomerList::build(&records, &directory, &query.filter, &query.now);
        debug!(total = list.total, filtered = list.filtered, "Customer list built");

        Ok(CustomerListResult {
            list,
            users: directory.users().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCrmStore;
    use crate::domain::customer::{Customer, CustomerDetails, CustomerRecord};
    use crate::domain::foundation::{CustomerId, ErrorCode, UserId};
    use crate::ports::{CustomerReadError, CustomerRepository};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingUsersReader;

    #[async_trait]
    impl CustomerReader for FailingUsersReader {
        async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomerReadError> {
            Ok(vec![])
        }

        async fn list_customers_in_range(
            &self,
            _start: &Timestamp,
            _end: &Timestamp,
        ) -> Result<Vec<CustomerRecord>, CustomerReadError> {
            Ok(vec![])
        }

        async fn find_customer(
            &self,
            _id: &CustomerId,
        ) -> Result<Option<CustomerRecord>, CustomerReadError> {
            Ok(None)
        }

        async fn list_users(&self) -> Result<Vec<User>, CustomerReadError> {
            Err(CustomerReadError::Database("connection reset".to_string()))
        }
    }

    /// Counts directory fetches made on behalf of one list query.
    struct CountingReader {
        inner: Arc<InMemoryCrmStore>,
        user_fetches: AtomicUsize,
    }

    #[async_trait]
    impl CustomerReader for CountingReader {
        async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomerReadError> {
            self.inner.list_customers().await
        }

        async fn list_customers_in_range(
            &self,
            start: &Timestamp,
            end: &Timestamp,
        ) -> Result<Vec<CustomerRecord>, CustomerReadError> {
            self.inner.list_customers_in_range(start, end).await
        }

        async fn find_customer(
            &self,
            id: &CustomerId,
        ) -> Result<Option<CustomerRecord>, CustomerReadError> {
            self.inner.find_customer(id).await
        }

        async fn list_users(&self) -> Result<Vec<User>, CustomerReadError> {
            self.user_fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.list_users().await
        }
    }

    async fn seed(store: &InMemoryCrmStore, name: &str, assignee: Option<UserId>) {
        let details = CustomerDetails {
            company_name: name.to_string(),
            assignee_id: assignee,
            ..Default::default()
        };
        let customer = Customer::create(CustomerId::new(), details, Timestamp::now()).unwrap();
        store.insert(&customer).await.unwrap();
    }

    #[tokio::test]
    async fn builds_rows_with_assignee_names() {
        let store = Arc::new(InMemoryCrmStore::new());
        let user = User {
            id: UserId::new(),
            email: "rep@example.com".to_string(),
            first_name: Some("Taro".to_string()),
            last_name: Some("Yamada".to_string()),
            profile_image_url: None,
            slack_id: None,
        };
        store.add_user(user.clone()).await;
        seed(&store, "Acme", Some(user.id)).await;
        seed(&store, "Globex", None).await;

        let result = GetCustomerListHandler::new(store)
            .handle(GetCustomerListQuery {
                filter: CustomerFilter::default(),
                now: Timestamp::now(),
            })
            .await
            .unwrap();

        assert_eq!(result.list.total, 2);
        assert_eq!(result.users.len(), 1);
        let acme = result
            .list
            .rows
            .iter()
            .find(|r| r.company_name == "Acme")
            .unwrap();
        assert_eq!(acme.assignee_name, "Yamada Taro");
    }

    #[tokio::test]
    async fn directory_is_fetched_once_and_resolves_assignees() {
        let store = Arc::new(InMemoryCrmStore::new());
        let user = User {
            id: UserId::new(),
            email: "rep@example.com".to_string(),
            first_name: Some("Hanako".to_string()),
            last_name: Some("Sato".to_string()),
            profile_image_url: None,
            slack_id: None,
        };
        store.add_user(user.clone()).await;
        seed(&store, "Acme", Some(user.id)).await;
        seed(&store, "Initech", Some(UserId::new())).await;
        let reader = Arc::new(CountingReader {
            inner: store,
            user_fetches: AtomicUsize::new(0),
        });

        let result = GetCustomerListHandler::new(reader.clone())
            .handle(GetCustomerListQuery {
                filter: CustomerFilter::default(),
                now: Timestamp::now(),
            })
            .await
            .unwrap();

        assert_eq!(reader.user_fetches.load(Ordering::SeqCst), 1);
        let name_of = |company: &str| {
            result
                .list
                .rows
                .iter()
                .find(|r| r.company_name == company)
                .map(|r| r.assignee_name.clone())
                .unwrap()
        };
        assert_eq!(name_of("Acme"), "Sato Hanako");
        assert_eq!(name_of("Initech"), "—");
    }

    #[tokio::test]
    async fn filter_reports_filtered_and_total_counts() {
        let store = Arc::new(InMemoryCrmStore::new());
        seed(&store, "Acme", None).await;
        seed(&store, "Globex", None).await;

        let result = GetCustomerListHandler::new(store)
            .handle(GetCustomerListQuery {
                filter: CustomerFilter {
                    search: Some("glo".to_string()),
                    ..Default::default()
                },
                now: Timestamp::now(),
            })
            .await
            .unwrap();

        assert_eq!(result.list.filtered, 1);
        assert_eq!(result.list.total, 2);
        assert_eq!(result.list.rows[0].company_name, "Globex");
    }

    #[tokio::test]
    async fn either_fetch_failing_fails_the_query() {
        let err = GetCustomerListHandler::new(Arc::new(FailingUsersReader))
            .handle(GetCustomerListQuery {
                filter: CustomerFilter::default(),
                now: Timestamp::now(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
