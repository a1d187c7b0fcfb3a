//! Deadline status of outstanding next actions.

use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::customer::NextAction;
use crate::domain::foundation::{RecordDate, Timestamp, EMPTY_DISPLAY};

/// Visual treatment for a deadline cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// No due date.
    Plain,
    /// Past due.
    Urgent,
    /// Due today.
    Warning,
    /// Due later.
    Normal,
}

/// Deadline text and urgency of an action's due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineStatus {
    pub days_until: Option<i64>,
    pub text: String,
    pub urgency: Urgency,
}

impl DeadlineStatus {
    fn undated() -> Self {
        Self {
            days_until: None,
            text: EMPTY_DISPLAY.to_string(),
            urgency: Urgency::Plain,
        }
    }

    /// Classifies a due date against `now`.
    ///
    /// Days are counted in UTC calendar dates, so a due date of today is
    /// `0` regardless of the time of day. An unparseable due date is
    /// treated like a missing one.
    pub fn evaluate(due_date: Option<&RecordDate>, now: &Timestamp) -> Self {
        let Some(due) = due_date.and_then(RecordDate::parse) else {
            return Self::undated();
        };
        let days_until = (due.date() - now.date()).num_days();
        let (text, urgency) = match days_until.cmp(&0) {
            Ordering::Less => (format!("{} days overdue", -days_until), Urgency::Urgent),
            Ordering::Equal => ("today".to_string(), Urgency::Warning),
            Ordering::Greater => (format!("in {} days", days_until), Urgency::Normal),
        };
        Self {
            days_until: Some(days_until),
            text,
            urgency,
        }
    }
}

/// Active actions ordered by due date, earliest first; undated ones last.
///
/// The sort is stable, so actions with equal keys keep their input order.
pub fn sort_active_actions(next_actions: &[NextAction]) -> Vec<&NextAction> {
    let mut active: Vec<&NextAction> = next_actions.iter().filter(|a| a.is_active()).collect();
    active.sort_by(|a, b| {
        let a_due = a.due_date().and_then(RecordDate::parse);
        let b_due = b.due_date().and_then(RecordDate::parse);
        match (a_due, b_due) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CustomerId, NextActionId};

    fn now() -> Timestamp {
        Timestamp::parse("2024-06-15T10:30:00Z").unwrap()
    }

    fn due(text: &str) -> RecordDate {
        RecordDate::from_raw(text)
    }

    fn action(content: &str, due: Option<&str>, active: bool) -> NextAction {
        NextAction::reconstitute(
            NextActionId::new(),
            CustomerId::new(),
            content.to_string(),
            due.map(RecordDate::from_raw),
            Timestamp::from_ymd(2024, 6, 1).unwrap(),
            None,
            active,
        )
    }

    #[test]
    fn missing_due_date_is_plain() {
        let status = DeadlineStatus::evaluate(None, &now());
        assert_eq!(status.text, "—");
        assert_eq!(status.urgency, Urgency::Plain);
        assert_eq!(status.days_until, None);
    }

    #[test]
    fn past_due_is_urgent() {
        let status = DeadlineStatus::evaluate(Some(&due("2024-06-12")), &now());
        assert_eq!(status.text, "3 days overdue");
        assert_eq!(status.urgency, Urgency::Urgent);
        assert_eq!(status.days_until, Some(-3));
    }

    #[test]
    fn due_today_is_warning_whatever_the_time() {
        let status = DeadlineStatus::evaluate(Some(&due("2024-06-15")), &now());
        assert_eq!(status.text, "today");
        assert_eq!(status.urgency, Urgency::Warning);
    }

    #[test]
    fn future_due_is_normal() {
        let status = DeadlineStatus::evaluate(Some(&due("2024-06-16")), &now());
        assert_eq!(status.text, "in 1 days");
        assert_eq!(status.urgency, Urgency::Normal);
    }

    #[test]
    fn unparseable_due_date_is_plain() {
        let status = DeadlineStatus::evaluate(Some(&due("next week")), &now());
        assert_eq!(status.urgency, Urgency::Plain);
    }

    #[test]
    fn sorts_active_by_due_date_with_undated_last() {
        let actions = vec![
            action("undated", None, true),
            action("late", Some("2024-07-01"), true),
            action("done", Some("2024-05-01"), false),
            action("early", Some("2024-06-10"), true),
        ];

        let sorted: Vec<_> = sort_active_actions(&actions)
            .into_iter()
            .map(NextAction::content)
            .collect();
        assert_eq!(sorted, vec!["early", "late", "undated"]);
    }
}
