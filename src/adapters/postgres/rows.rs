//! Row mapping shared by the PostgreSQL reader and repositories.
//!
//! Date-only columns are selected as text (`::text`) and wrapped in
//! `RecordDate` without validation.

use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::customer::{Counterpart, Customer, CustomerStatus, Meeting, NextAction, User};
use crate::domain::foundation::{
    CounterpartId, CustomerId, MeetingId, NextActionId, Rank, RecordDate, Timestamp, UserId,
    ValidationError,
};
use crate::ports::CustomerReadError;

pub(super) const CUSTOMER_COLUMNS: &str = r#"
    c.id, c."companyName", c."companyRank", c."assigneeId", c.status,
    c."proposedProducts", c."leadSource",
    c."firstContactDate"::text AS "firstContactDate",
    c."nextMeetingDate"::text AS "nextMeetingDate",
    c."createdAt", c."updatedAt"
"#;

pub(super) const MEETING_COLUMNS: &str = r#"
    m.id, m."customerId", m."meetingDate"::text AS "meetingDate", m.minutes,
    m."googleDriveLink", m."circleBackLink", m."recorderId"
"#;

pub(super) const COUNTERPART_COLUMNS: &str = r#"
    p.id, p."customerId", p.name, p.department, p.position, p.rank
"#;

pub(super) const NEXT_ACTION_COLUMNS: &str = r#"
    n.id, n."customerId", n.content, n."dueDate"::text AS "dueDate",
    n."setDate", n."assigneeId", n."isActive"
"#;

pub(super) const USER_COLUMNS: &str = r#"
    u.id, u.email, u."firstName", u."lastName", u."profileImageUrl", u."slackId"
"#;

fn rank(table: &'static str, raw: Option<String>) -> Result<Option<Rank>, CustomerReadError> {
    raw.map(|r| {
        r.parse::<Rank>()
            .map_err(|e: ValidationError| CustomerReadError::CorruptRow {
                table,
                reason: e.to_string(),
            })
    })
    .transpose()
}

fn record_date(raw: Option<String>) -> Option<RecordDate> {
    raw.map(RecordDate::from_raw)
}

fn user_id(raw: Option<Uuid>) -> Option<UserId> {
    raw.map(UserId::from_uuid)
}

pub(super) fn row_to_customer(row: &PgRow) -> Result<Customer, CustomerReadError> {
    let status: Option<String> = row.try_get("status")?;
    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("createdAt")?;
    let updated_at: Option<chrono::DateTime<chrono::Utc>> = row.try_get("updatedAt")?;

    Ok(Customer::reconstitute(
        CustomerId::from_uuid(row.try_get("id")?),
        row.try_get("companyName")?,
        rank("customers", row.try_get("companyRank")?)?,
        user_id(row.try_get("assigneeId")?),
        status.as_deref().map(CustomerStatus::parse),
        row.try_get("proposedProducts")?,
        row.try_get("leadSource")?,
        record_date(row.try_get("firstContactDate")?),
        record_date(row.try_get("nextMeetingDate")?),
        Timestamp::from_datetime(created_at),
        updated_at.map(Timestamp::from_datetime),
    ))
}

pub(super) fn row_to_meeting(row: &PgRow) -> Result<Meeting, CustomerReadError> {
    let meeting_date: String = row.try_get("meetingDate")?;
    Ok(Meeting::reconstitute(
        MeetingId::from_uuid(row.try_get("id")?),
        CustomerId::from_uuid(row.try_get("customerId")?),
        RecordDate::from_raw(meeting_date),
        row.try_get("minutes")?,
        row.try_get("googleDriveLink")?,
        row.try_get("circleBackLink")?,
        user_id(row.try_get("recorderId")?),
    ))
}

pub(super) fn row_to_counterpart(row: &PgRow) -> Result<Counterpart, CustomerReadError> {
    Ok(Counterpart::reconstitute(
        CounterpartId::from_uuid(row.try_get("id")?),
        CustomerId::from_uuid(row.try_get("customerId")?),
        row.try_get("name")?,
        row.try_get("department")?,
        row.try_get("position")?,
        rank("counterparts", row.try_get("rank")?)?,
    ))
}

pub(super) fn row_to_next_action(row: &PgRow) -> Result<NextAction, CustomerReadError> {
    let set_date: chrono::DateTime<chrono::Utc> = row.try_get("setDate")?;
    Ok(NextAction::reconstitute(
        NextActionId::from_uuid(row.try_get("id")?),
        CustomerId::from_uuid(row.try_get("customerId")?),
        row.try_get("content")?,
        record_date(row.try_get("dueDate")?),
        Timestamp::from_datetime(set_date),
        user_id(row.try_get("assigneeId")?),
        row.try_get("isActive")?,
    ))
}

pub(super) fn row_to_user(row: &PgRow) -> Result<User, CustomerReadError> {
    Ok(User {
        id: UserId::from_uuid(row.try_get("id")?),
        email: row.try_get("email")?,
        first_name: row.try_get("firstName")?,
        last_name: row.try_get("lastName")?,
        profile_image_url: row.try_get("profileImageUrl")?,
        slack_id: row.try_get("slackId")?,
    })
}

/// Maps every row, stopping at the first failure.
pub(super) fn map_rows<T>(
    rows: &[PgRow],
    map: fn(&PgRow) -> Result<T, CustomerReadError>,
) -> Result<Vec<T>, CustomerReadError> {
    rows.iter().map(map).collect()
}
