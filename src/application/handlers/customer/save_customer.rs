//! SaveCustomerHandler - Command handler for creating or editing a customer.

use std::sync::Arc;
use tracing::info;

use crate::domain::customer::{Customer, CustomerDetails};
use crate::domain::foundation::{CustomerId, DomainError, ErrorCode, Timestamp};
use crate::ports::CustomerRepository;

/// Command to save a customer form.
///
/// `customer_id` is `None` for a new customer.
#[derive(Debug, Clone)]
pub struct SaveCustomerCommand {
    pub customer_id: Option<CustomerId>,
    pub details: CustomerDetails,
}

#[derive(Debug, Clone)]
pub struct SaveCustomerResult {
    pub customer: Customer,
    pub created: bool,
}

/// Handler for saving customers.
pub struct SaveCustomerHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl SaveCustomerHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SaveCustomerCommand) -> Result<SaveCustomerResult, DomainError> {
        let now = Timestamp::now();

        let Some(id) = cmd.customer_id else {
            let customer = Customer::create(CustomerId::new(), cmd.details, now)?;
            self.repository.insert(&customer).await?;
            info!(customer_id = %customer.id(), "Customer created");
            return Ok(SaveCustomerResult {
                customer,
                created: true,
            });
        };

        let mut customer = self.repository.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::CustomerNotFound, format!("Customer not found: {}", id))
        })?;
        customer.update(cmd.details, now)?;
        self.repository.update(&customer).await?;
        info!(customer_id = %id, "Customer updated");

        Ok(SaveCustomerResult {
            customer,
            created: false,
        })
    }
}
