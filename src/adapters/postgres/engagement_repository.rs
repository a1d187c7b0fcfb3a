//! PostgreSQL implementations of the meeting, counterpart and next-action
//! repositories.
//!
//! A child insert whose customer is gone fails the foreign key; that is
//! reported as `CustomerNotFound`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::customer::{Counterpart, Meeting, NextAction};
use crate::domain::foundation::{
    CounterpartId, CustomerId, DomainError, ErrorCode, MeetingId, NextActionId,
};
use crate::ports::{CounterpartRepository, MeetingRepository, NextActionRepository};

use super::rows::{row_to_meeting, row_to_next_action, MEETING_COLUMNS, NEXT_ACTION_COLUMNS};

fn insert_error(what: &str, customer_id: &CustomerId, err: sqlx::Error) -> DomainError {
    let is_fk_violation = err
        .as_database_error()
        .map(|db| db.is_foreign_key_violation())
        .unwrap_or(false);
    if is_fk_violation {
        DomainError::new(
            ErrorCode::CustomerNotFound,
            format!("Customer not found: {}", customer_id),
        )
    } else {
        DomainError::database(format!("Failed to insert {}: {}", what, err))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Meetings
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresMeetingRepository {
    pool: PgPool,
}

impl PostgresMeetingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingRepository for PostgresMeetingRepository {
    async fn insert(&self, meeting: &Meeting) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO meetings (
                id, "customerId", "meetingDate", minutes,
                "googleDriveLink", "circleBackLink", "recorderId"
            ) VALUES ($1, $2, $3::date, $4, $5, $6, $7)
            "#,
        )
        .bind(meeting.id().as_uuid())
        .bind(meeting.customer_id().as_uuid())
        .bind(meeting.meeting_date().as_str())
        .bind(meeting.minutes())
        .bind(meeting.google_drive_link())
        .bind(meeting.circle_back_link())
        .bind(meeting.recorder_id().map(|u| *u.as_uuid()))
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error("meeting", meeting.customer_id(), e))?;

        Ok(())
    }

    async fn update(&self, meeting: &Meeting) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE meetings SET
                "meetingDate" = $2::date,
                minutes = $3,
                "googleDriveLink" = $4,
                "circleBackLink" = $5,
                "recorderId" = $6
            WHERE id = $1
            "#,
        )
        .bind(meeting.id().as_uuid())
        .bind(meeting.meeting_date().as_str())
        .bind(meeting.minutes())
        .bind(meeting.google_drive_link())
        .bind(meeting.circle_back_link())
        .bind(meeting.recorder_id().map(|u| *u.as_uuid()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update meeting: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(meeting_not_found(meeting.id()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>, DomainError> {
        let sql = format!(r#"SELECT {MEETING_COLUMNS} FROM meetings m WHERE m.id = $1"#);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch meeting: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_meeting(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &MeetingId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM meetings WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete meeting: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(meeting_not_found(id));
        }
        Ok(())
    }
}

fn meeting_not_found(id: &MeetingId) -> DomainError {
    DomainError::new(ErrorCode::MeetingNotFound, format!("Meeting not found: {}", id))
}

// ════════════════════════════════════════════════════════════════════════════════
// Counterparts
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresCounterpartRepository {
    pool: PgPool,
}

impl PostgresCounterpartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterpartRepository for PostgresCounterpartRepository {
    async fn insert(&self, counterpart: &Counterpart) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO counterparts (id, "customerId", name, department, position, rank)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(counterpart.id().as_uuid())
        .bind(counterpart.customer_id().as_uuid())
        .bind(counterpart.name())
        .bind(counterpart.department())
        .bind(counterpart.position())
        .bind(counterpart.rank().map(|r| r.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error("counterpart", counterpart.customer_id(), e))?;

        Ok(())
    }

    async fn delete(&self, id: &CounterpartId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM counterparts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete counterpart: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CounterpartNotFound,
                format!("Counterpart not found: {}", id),
            ));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Next actions
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresNextActionRepository {
    pool: PgPool,
}

impl PostgresNextActionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NextActionRepository for PostgresNextActionRepository {
    async fn insert(&self, action: &NextAction) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO next_actions (
                id, "customerId", content, "dueDate", "setDate", "assigneeId", "isActive"
            ) VALUES ($1, $2, $3, $4::date, $5, $6, $7)
            "#,
        )
        .bind(action.id().as_uuid())
        .bind(action.customer_id().as_uuid())
        .bind(action.content())
        .bind(action.due_date().map(|d| d.as_str()))
        .bind(action.set_date().as_datetime())
        .bind(action.assignee_id().map(|u| *u.as_uuid()))
        .bind(action.is_active())
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error("next action", action.customer_id(), e))?;

        Ok(())
    }

    async fn update(&self, action: &NextAction) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE next_actions SET
                content = $2,
                "dueDate" = $3::date,
                "assigneeId" = $4,
                "isActive" = $5
            WHERE id = $1
            "#,
        )
        .bind(action.id().as_uuid())
        .bind(action.content())
        .bind(action.due_date().map(|d| d.as_str()))
        .bind(action.assignee_id().map(|u| *u.as_uuid()))
        .bind(action.is_active())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update next action: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NextActionNotFound,
                format!("Next action not found: {}", action.id()),
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &NextActionId) -> Result<Option<NextAction>, DomainError> {
        let sql = format!(r#"SELECT {NEXT_ACTION_COLUMNS} FROM next_actions n WHERE n.id = $1"#);
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch next action: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_next_action(&row)?)),
            None => Ok(None),
        }
    }
}
