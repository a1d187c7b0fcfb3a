//! DeleteCustomerHandler - Command handler for removing a customer.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{CustomerId, DomainError};
use crate::ports::CustomerRepository;

#[derive(Debug, Clone)]
pub struct DeleteCustomerCommand {
    pub customer_id: CustomerId,
}

/// Handler for deleting customers together with their owned records.
pub struct DeleteCustomerHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl DeleteCustomerHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCustomerCommand) -> Result<(), DomainError> {
        self.repository.delete(&cmd.customer_id).await?;
        info!(customer_id = %cmd.customer_id, "Customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCrmStore;
    use crate::domain::customer::{Customer, CustomerDetails};
    use crate::domain::foundation::{ErrorCode, Timestamp};

    #[tokio::test]
    async fn deletes_existing_customer() {
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
        store.insert(&customer).await.unwrap();

        DeleteCustomerHandler::new(store.clone())
            .handle(DeleteCustomerCommand {
                customer_id: *customer.id(),
            })
            .await
            .unwrap();

        assert_eq!(store.customer_count().await, 0);
    }

    #[tokio::test]
    async fn missing_customer_is_not_found() {
        let err = DeleteCustomerHandler::new(Arc::new(InMemoryCrmStore::new()))
            .handle(DeleteCustomerCommand {
                customer_id: CustomerId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }
}
