//! PostgreSQL implementation of CustomerRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::customer::Customer;
use crate::domain::foundation::{CustomerId, DomainError, ErrorCode};
use crate::ports::CustomerRepository;

use super::rows::{row_to_customer, CUSTOMER_COLUMNS};

#[derive(Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: &CustomerId) -> DomainError {
    DomainError::new(
        ErrorCode::CustomerNotFound,
        format!("Customer not found: {}", id),
    )
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn insert(&self, customer: &Customer) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO customers (
                id, "companyName", "companyRank", "assigneeId", status,
                "proposedProducts", "leadSource", "firstContactDate",
                "nextMeetingDate", "createdAt", "updatedAt"
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8::date, $9::date, $10, $11)
            "#,
        )
        .bind(customer.id().as_uuid())
        .bind(customer.company_name())
        .bind(customer.company_rank().map(|r| r.as_str()))
        .bind(customer.assignee_id().map(|u| *u.as_uuid()))
        .bind(customer.status().map(|s| s.as_str()))
        .bind(customer.proposed_products())
        .bind(customer.lead_source())
        .bind(customer.first_contact_date().map(|d| d.as_str()))
        .bind(customer.next_meeting_date().map(|d| d.as_str()))
        .bind(customer.created_at().as_datetime())
        .bind(customer.updated_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert customer: {}", e)))?;

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE customers SET
                "companyName" = $2,
                "companyRank" = $3,
                "assigneeId" = $4,
                status = $5,
                "proposedProducts" = $6,
                "leadSource" = $7,
                "firstContactDate" = $8::date,
                "nextMeetingDate" = $9::date,
                "updatedAt" = $10
            WHERE id = $1
            "#,
        )
        .bind(customer.id().as_uuid())
        .bind(customer.company_name())
        .bind(customer.company_rank().map(|r| r.as_str()))
        .bind(customer.assignee_id().map(|u| *u.as_uuid()))
        .bind(customer.status().map(|s| s.as_str()))
        .bind(customer.proposed_products())
        .bind(customer.lead_source())
        .bind(customer.first_contact_date().map(|d| d.as_str()))
        .bind(customer.next_meeting_date().map(|d| d.as_str()))
        .bind(customer.updated_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update customer: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found(customer.id()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, DomainError> {
        let sql = format!(r#"SELECT {CUSTOMER_COLUMNS} FROM customers c WHERE c.id = $1"#);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch customer: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), DomainError> {
        // Owned rows go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete customer: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
