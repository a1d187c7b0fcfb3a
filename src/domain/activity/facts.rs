//! Event extraction: dated activity facts from heterogeneous sources.

use serde::Serialize;

use crate::domain::customer::{Meeting, NextAction};
use crate::domain::foundation::Timestamp;

/// Where an activity fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivitySource {
    Meeting,
    CompletedAction,
}

/// One dated piece of evidence that the customer was worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFact {
    pub source: ActivitySource,
    pub occurred_at: Timestamp,
}

/// Collects the activity facts that count toward "last activity".
///
/// Every meeting date and every due date of a completed action that is not
/// later than `now`. Unparseable dates are skipped. The result is ordered
/// oldest first.
pub fn extract_activity_facts(
    meetings: &[Meeting],
    next_actions: &[NextAction],
    now: &Timestamp,
) -> Vec<ActivityFact> {
    let meeting_facts = meetings.iter().filter_map(|meeting| {
        meeting.meeting_date().parse().map(|occurred_at| ActivityFact {
            source: ActivitySource::Meeting,
            occurred_at,
        })
    });

    let action_facts = next_actions
        .iter()
        .filter(|action| !action.is_active())
        .filter_map(|action| action.due_date().and_then(|due| due.parse()))
        .map(|occurred_at| ActivityFact {
            source: ActivitySource::CompletedAction,
            occurred_at,
        });

    let mut facts: Vec<ActivityFact> = meeting_facts
        .chain(action_facts)
        .filter(|fact| !fact.occurred_at.is_after(now))
        .collect();
    facts.sort_by_key(|fact| fact.occurred_at);
    facts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CustomerId, MeetingId, NextActionId, RecordDate};

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    fn meeting(date: &str) -> Meeting {
        Meeting::reconstitute(
            MeetingId::new(),
            CustomerId::new(),
            RecordDate::from_raw(date),
            None,
            None,
            None,
            None,
        )
    }

    fn action(due: Option<&str>, active: bool) -> NextAction {
        NextAction::reconstitute(
            NextActionId::new(),
            CustomerId::new(),
            "Follow up".to_string(),
            due.map(RecordDate::from_raw),
            ts(2024, 1, 1),
            None,
            active,
        )
    }

    #[test]
    fn merges_meetings_and_completed_actions_oldest_first() {
        let now = ts(2024, 6, 15);
        let facts = extract_activity_facts(
            &[meeting("2024-06-10"), meeting("2024-04-02")],
            &[action(Some("2024-05-01"), false)],
            &now,
        );

        let dates: Vec<_> = facts.iter().map(|f| f.occurred_at).collect();
        assert_eq!(dates, vec![ts(2024, 4, 2), ts(2024, 5, 1), ts(2024, 6, 10)]);
        assert_eq!(facts[1].source, ActivitySource::CompletedAction);
    }

    #[test]
    fn ignores_active_actions_and_actions_without_due_dates() {
        let now = ts(2024, 6, 15);
        let facts = extract_activity_facts(
            &[],
            &[action(Some("2024-06-01"), true), action(None, false)],
            &now,
        );
        assert!(facts.is_empty());
    }

    #[test]
    fn drops_future_dates() {
        let now = ts(2024, 6, 15);
        let facts = extract_activity_facts(
            &[meeting("2024-06-16"), meeting("2024-06-15")],
            &[action(Some("2024-07-01"), false)],
            &now,
        );
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].occurred_at, now);
    }

    #[test]
    fn drops_malformed_dates_silently() {
        let now = ts(2024, 6, 15);
        let facts = extract_activity_facts(
            &[meeting("garbage"), meeting("2024-06-01")],
            &[action(Some("2024/99/99"), false)],
            &now,
        );
        assert_eq!(facts.len(), 1);
    }
}
