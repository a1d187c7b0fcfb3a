//! Counterpart command handlers: add, remove.

use std::sync::Arc;

use crate::domain::customer::Counterpart;
use crate::domain::foundation::{CounterpartId, CustomerId, DomainError, Rank};
use crate::ports::CounterpartRepository;

#[derive(Debug, Clone)]
pub struct AddCounterpartCommand {
    pub customer_id: CustomerId,
    pub name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub rank: Option<Rank>,
}

#[derive(Debug, Clone)]
pub struct RemoveCounterpartCommand {
    pub counterpart_id: CounterpartId,
}

pub struct AddCounterpartHandler {
    repository: Arc<dyn CounterpartRepository>,
}

impl AddCounterpartHandler {
    pub fn new(repository: Arc<dyn CounterpartRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddCounterpartCommand) -> Result<Counterpart, DomainError> {
        let counterpart = Counterpart::new(
            CounterpartId::new(),
            cmd.customer_id,
            cmd.name,
            cmd.department,
            cmd.position,
            cmd.rank,
        )?;
        self.repository.insert(&counterpart).await?;
        Ok(counterpart)
    }
}

pub struct RemoveCounterpartHandler {
    repository: Arc<dyn CounterpartRepository>,
}

impl RemoveCounterpartHandler {
    pub fn new(repository: Arc<dyn CounterpartRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveCounterpartCommand) -> Result<(), DomainError> {
        self.repository.delete(&cmd.counterpart_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCrmStore;
    use crate::domain::customer::{Customer, CustomerDetails};
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::ports::{CustomerReader, CustomerRepository};

    #[tokio::test]
    async fn adds_and_removes_counterparts() {
        let store = Arc::new(InMemoryCrmStore::new());
        let customer = Customer::create(
            CustomerId::new(),
            CustomerDetails {
                company_name: "Acme".to_string(),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        CustomerRepository::insert(store.as_ref(), &customer).await.unwrap();

        let counterpart = AddCounterpartHandler::new(store.clone())
            .handle(AddCounterpartCommand {
                customer_id: *customer.id(),
                name: "Sato".to_string(),
                department: Some("Sales".to_string()),
                position: None,
                rank: Some(Rank::A),
            })
            .await
            .unwrap();

        let record = store.find_customer(customer.id()).await.unwrap().unwrap();
        assert_eq!(record.counterparts.len(), 1);

        RemoveCounterpartHandler::new(store.clone())
            .handle(RemoveCounterpartCommand {
                counterpart_id: *counterpart.id(),
            })
            .await
            .unwrap();

        let record = store.find_customer(customer.id()).await.unwrap().unwrap();
        assert!(record.counterparts.is_empty());
    }

    #[tokio::test]
    async fn counterpart_needs_existing_customer() {
        let err = AddCounterpartHandler::new(Arc::new(InMemoryCrmStore::new()))
            .handle(AddCounterpartCommand {
                customer_id: CustomerId::new(),
                name: "Sato".to_string(),
                department: None,
                position: None,
                rank: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }
}
