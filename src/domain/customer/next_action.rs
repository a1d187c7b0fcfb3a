//! Follow-up tasks tied to a customer.
//!
//! An action is either active (outstanding) or completed. Completing only
//! flips the flag; completed actions stay as history.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CustomerId, DomainError, ErrorCode, NextActionId, RecordDate, Timestamp, UserId,
    ValidationError,
};

/// A follow-up task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    id: NextActionId,
    customer_id: CustomerId,
    content: String,
    due_date: Option<RecordDate>,
    set_date: Timestamp,
    assignee_id: Option<UserId>,
    is_active: bool,
}

impl NextAction {
    /// Creates a new active action, stamping the set date.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the content is blank
    /// - `InvalidFormat` if a due date is given but is not a date
    pub fn new(
        id: NextActionId,
        customer_id: CustomerId,
        content: String,
        due_date: Option<String>,
        assignee_id: Option<UserId>,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(ValidationError::empty_field("content").into());
        }
        let due_date = match due_date.filter(|d| !d.trim().is_empty()) {
            Some(text) => Some(RecordDate::new("due_date", text)?),
            None => None,
        };
        Ok(Self {
            id,
            customer_id,
            content,
            due_date,
            set_date: now,
            assignee_id,
            is_active: true,
        })
    }

    /// Reconstitute an action from persistence (no validation).
    pub fn reconstitute(
        id: NextActionId,
        customer_id: CustomerId,
        content: String,
        due_date: Option<RecordDate>,
        set_date: Timestamp,
        assignee_id: Option<UserId>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            customer_id,
            content,
            due_date,
            set_date,
            assignee_id,
            is_active,
        }
    }

    pub fn id(&self) -> &NextActionId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn due_date(&self) -> Option<&RecordDate> {
        self.due_date.as_ref()
    }

    pub fn set_date(&self) -> &Timestamp {
        &self.set_date
    }

    pub fn assignee_id(&self) -> Option<&UserId> {
        self.assignee_id.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Marks the action as done.
    ///
    /// # Errors
    ///
    /// - `ActionAlreadyCompleted` if the action is no longer active
    pub fn complete(&mut self) -> Result<(), DomainError> {
        if !self.is_active {
            return Err(DomainError::new(
                ErrorCode::ActionAlreadyCompleted,
                format!("Next action {} is already completed", self.id),
            ));
        }
        self.is_active = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(content: &str, due: Option<&str>) -> Result<NextAction, DomainError> {
        NextAction::new(
            NextActionId::new(),
            CustomerId::new(),
            content.to_string(),
            due.map(str::to_string),
            None,
            Timestamp::from_ymd(2024, 6, 1).unwrap(),
        )
    }

    #[test]
    fn new_actions_start_active_with_set_date() {
        let action = action("Send proposal", Some("2024-06-20")).unwrap();
        assert!(action.is_active());
        assert_eq!(action.set_date(), &Timestamp::from_ymd(2024, 6, 1).unwrap());
        assert_eq!(action.due_date().map(RecordDate::as_str), Some("2024-06-20"));
    }

    #[test]
    fn content_is_required() {
        let err = action("  ", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }

    #[test]
    fn blank_due_date_means_no_due_date() {
        let action = action("Call back", Some(" ")).unwrap();
        assert!(action.due_date().is_none());
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let err = action("Call back", Some("someday")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn complete_flips_active_flag_once() {
        let mut action = action("Send proposal", None).unwrap();

        action.complete().unwrap();
        assert!(!action.is_active());

        let err = action.complete().unwrap_err();
        assert_eq!(err.code, ErrorCode::ActionAlreadyCompleted);
        assert!(!action.is_active());
    }
}
