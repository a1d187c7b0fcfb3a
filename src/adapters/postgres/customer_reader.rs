//! PostgreSQL implementation of CustomerReader.
//!
//! Customers are fetched first; nested collections are then loaded with one
//! `= ANY($1)` query per table and grouped in memory.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::customer::{Counterpart, Customer, CustomerRecord, Meeting, NextAction, User};
use crate::domain::foundation::{CustomerId, Timestamp};
use crate::ports::{CustomerReadError, CustomerReader};

use super::rows::{
    map_rows, row_to_counterpart, row_to_customer, row_to_meeting, row_to_next_action,
    row_to_user, COUNTERPART_COLUMNS, CUSTOMER_COLUMNS, MEETING_COLUMNS, NEXT_ACTION_COLUMNS,
    USER_COLUMNS,
};

/// Which nested collections a snapshot query loads.
#[derive(Debug, Clone, Copy)]
struct Nested {
    counterparts: bool,
    next_actions: bool,
}

const ALL_NESTED: Nested = Nested {
    counterparts: true,
    next_actions: true,
};

const MEETINGS_ONLY: Nested = Nested {
    counterparts: false,
    next_actions: false,
};

/// PostgreSQL implementation of CustomerReader.
#[derive(Clone)]
pub struct PostgresCustomerReader {
    pool: PgPool,
}

impl PostgresCustomerReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_children(
        &self,
        columns: &str,
        table: &str,
        alias: &str,
        order_by: &str,
        ids: &[Uuid],
    ) -> Result<Vec<PgRow>, CustomerReadError> {
        let sql = format!(
            r#"SELECT {columns} FROM {table} {alias} WHERE {alias}."customerId" = ANY($1) ORDER BY {order_by}"#
        );
        Ok(sqlx::query(&sql).bind(ids).fetch_all(&self.pool).await?)
    }

    /// Attaches nested records to already-loaded customers.
    async fn assemble(
        &self,
        customers: Vec<Customer>,
        nested: Nested,
    ) -> Result<Vec<CustomerRecord>, CustomerReadError> {
        if customers.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = customers.iter().map(|c| *c.id().as_uuid()).collect();

        let meeting_rows = self
            .fetch_children(MEETING_COLUMNS, "meetings", "m", r#"m."meetingDate" DESC"#, &ids)
            .await?;
        let mut meetings = group(map_rows(&meeting_rows, row_to_meeting)?, Meeting::customer_id);

        let mut counterparts = if nested.counterparts {
            let rows = self
                .fetch_children(COUNTERPART_COLUMNS, "counterparts", "p", "p.name", &ids)
                .await?;
            group(map_rows(&rows, row_to_counterpart)?, Counterpart::customer_id)
        } else {
            HashMap::new()
        };

        let mut next_actions = if nested.next_actions {
            let rows = self
                .fetch_children(
                    NEXT_ACTION_COLUMNS,
                    "next_actions",
                    "n",
                    r#"n."setDate" DESC"#,
                    &ids,
                )
                .await?;
            group(map_rows(&rows, row_to_next_action)?, NextAction::customer_id)
        } else {
            HashMap::new()
        };

        Ok(customers
            .into_iter()
            .map(|customer| {
                let id = *customer.id();
                CustomerRecord::new(customer)
                    .with_meetings(meetings.remove(&id).unwrap_or_default())
                    .with_counterparts(counterparts.remove(&id).unwrap_or_default())
                    .with_next_actions(next_actions.remove(&id).unwrap_or_default())
            })
            .collect())
    }
}

fn group<T>(rows: Vec<T>, owner: fn(&T) -> &CustomerId) -> HashMap<CustomerId, Vec<T>> {
    let mut grouped: HashMap<CustomerId, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(*owner(&row)).or_default().push(row);
    }
    grouped
}

#[async_trait]
impl CustomerReader for PostgresCustomerReader {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomerReadError> {
        let sql = format!(r#"SELECT {CUSTOMER_COLUMNS} FROM customers c ORDER BY c."createdAt" DESC"#);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let customers = map_rows(&rows, row_to_customer)?;
        self.assemble(customers, ALL_NESTED).await
    }

    async fn list_customers_in_range(
        &self,
        start: &Timestamp,
        end: &Timestamp,
    ) -> Result<Vec<CustomerRecord>, CustomerReadError> {
        let sql = format!(
            r#"
            SELECT {CUSTOMER_COLUMNS}
            FROM customers c
            WHERE (c."createdAt" >= $1 AND c."createdAt" < $2)
               OR EXISTS (
                   SELECT 1 FROM meetings m
                   WHERE m."customerId" = c.id
                     AND m."meetingDate" >= $3 AND m."meetingDate" < $4
               )
            ORDER BY c."createdAt" DESC
            "#
        );
        let rows = sqlx::query(&sql)
            .bind(start.as_datetime())
            .bind(end.as_datetime())
            .bind(start.date())
            .bind(end.date())
            .fetch_all(&self.pool)
            .await?;
        let customers = map_rows(&rows, row_to_customer)?;
        self.assemble(customers, MEETINGS_ONLY).await
    }

    async fn find_customer(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerRecord>, CustomerReadError> {
        let sql = format!(r#"SELECT {CUSTOMER_COLUMNS} FROM customers c WHERE c.id = $1"#);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let customer = row_to_customer(&row)?;
                Ok(self.assemble(vec![customer], ALL_NESTED).await?.pop())
            }
            None => Ok(None),
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, CustomerReadError> {
        let sql = format!(r#"SELECT {USER_COLUMNS} FROM users u ORDER BY u."lastName" ASC NULLS LAST"#);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        map_rows(&rows, row_to_user)
    }
}
