use serde::Serialize;
use std::collections::HashMap;

use crate::domain::activity::{sort_active_actions, ActivityRecency, DeadlineStatus};
use crate::domain::customer::{assignee_display_name, CustomerRecord, NextAction, User};
use crate::domain::foundation::{
    CounterpartId, CustomerId, NextActionId, Rank, RecordDate, Timestamp, UserId, EMPTY_DISPLAY,
};

/// Users keyed by id, for resolving assignees and recorders.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    index: HashMap<UserId, usize>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        let index = users.iter().enumerate().map(|(i, u)| (u.id, i)).collect();
        Self { users, index }
    }

    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.index.get(id).map(|&i| &self.users[i])
    }

    /// Users in fetch order (surname ascending).
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartSummary {
    pub id: CounterpartId,
    pub name: String,
    pub rank: Option<Rank>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSummary {
    pub id: NextActionId,
    pub content: String,
    pub due_date: Option<RecordDate>,
    pub deadline: DeadlineStatus,
}

impl ActionSummary {
    fn of(action: &NextAction, now: &Timestamp) -> Self {
        Self {
            id: *action.id(),
            content: action.content().to_string(),
            due_date: action.due_date().cloned(),
            deadline: DeadlineStatus::evaluate(action.due_date(), now),
        }
    }
}

/// Display values for one row of the customer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListRow {
    pub id: CustomerId,
    pub company_name: String,
    pub company_rank: Option<Rank>,
    pub counterparts: Vec<CounterpartSummary>,
    pub assignee_id: Option<UserId>,
    pub assignee_name: String,
    /// Stored status value, used for filtering.
    pub status: Option<String>,
    pub status_label: String,
    pub lead_source: String,
    pub first_meeting_date: String,
    pub next_meeting_date: String,
    pub next_actions: Vec<ActionSummary>,
    pub last_activity: ActivityRecency,
}

impl CustomerListRow {
    pub fn build(record: &CustomerRecord, directory: &UserDirectory, now: &Timestamp) -> Self {
        let customer = &record.customer;
        let assignee = customer.assignee_id().and_then(|id| directory.find(id));

        let first_meeting = record
            .meetings
            .iter()
            .filter_map(|m| m.meeting_date().parse())
            .min();

        Self {
            id: *customer.id(),
            company_name: customer.company_name().to_string(),
            company_rank: customer.company_rank(),
            counterparts: record
                .counterparts
                .iter()
                .map(|c| CounterpartSummary {
                    id: *c.id(),
                    name: c.name().to_string(),
                    rank: c.rank(),
                })
                .collect(),
            assignee_id: customer.assignee_id().copied(),
            assignee_name: assignee_display_name(assignee),
            status: customer.status().map(|s| s.as_str().to_string()),
            status_label: customer
                .status()
                .map_or_else(|| EMPTY_DISPLAY.to_string(), |s| s.label().to_string()),
            lead_source: customer.lead_source().unwrap_or(EMPTY_DISPLAY).to_string(),
            first_meeting_date: short_date_or_placeholder(first_meeting),
            next_meeting_date: short_date_or_placeholder(
                customer.next_meeting_date().and_then(RecordDate::parse),
            ),
            next_actions: sort_active_actions(&record.next_actions)
                .into_iter()
                .map(|action| ActionSummary::of(action, now))
                .collect(),
            last_activity: ActivityRecency::for_customer(&record.meetings, &record.next_actions, now),
        }
    }
}

fn short_date_or_placeholder(date: Option<Timestamp>) -> String {
    date.map_or_else(|| EMPTY_DISPLAY.to_string(), |d| d.short_date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Counterpart, Customer, CustomerStatus, Meeting, StatusValue};
    use crate::domain::foundation::MeetingId;

    fn now() -> Timestamp {
        Timestamp::from_ymd(2024, 6, 15).unwrap()
    }

    fn user(id: UserId) -> User {
        User {
            id,
            email: "rep@example.com".to_string(),
            first_name: Some("Taro".to_string()),
            last_name: Some("Yamada".to_string()),
            profile_image_url: None,
            slack_id: None,
        }
    }

    fn customer(assignee: Option<UserId>, status: Option<CustomerStatus>) -> Customer {
        Customer::reconstitute(
            CustomerId::new(),
            "Acme".to_string(),
            Some(Rank::A),
            assignee,
            status,
            None,
            None,
            None,
            Some(RecordDate::from_raw("2024-07-04")),
            Timestamp::from_ymd(2024, 1, 1).unwrap(),
            None,
        )
    }

    fn meeting(customer_id: CustomerId, date: &str) -> Meeting {
        Meeting::reconstitute(
            MeetingId::new(),
            customer_id,
            RecordDate::from_raw(date),
            None,
            None,
            None,
            None,
        )
    }

    fn action(customer_id: CustomerId, content: &str, due: Option<&str>, active: bool) -> NextAction {
        NextAction::reconstitute(
            NextActionId::new(),
            customer_id,
            content.to_string(),
            due.map(RecordDate::from_raw),
            Timestamp::from_ymd(2024, 6, 1).unwrap(),
            None,
            active,
        )
    }

    #[test]
    fn builds_display_values() {
        let assignee_id = UserId::new();
        let customer = customer(Some(assignee_id), Some(StatusValue::Proposal.into()));
        let id = *customer.id();
        let record = CustomerRecord::new(customer)
            .with_meetings(vec![meeting(id, "2024-05-20"), meeting(id, "2024-03-04")])
            .with_next_actions(vec![
                action(id, "Call", None, true),
                action(id, "Quote", Some("2024-06-12"), true),
                action(id, "Intro", Some("2024-06-01"), false),
            ])
            .with_counterparts(vec![Counterpart::reconstitute(
                CounterpartId::new(),
                id,
                "Sato".to_string(),
                None,
                None,
                Some(Rank::B),
            )]);
        let directory = UserDirectory::new(vec![user(assignee_id)]);

        let row = CustomerListRow::build(&record, &directory, &now());

        assert_eq!(row.assignee_name, "Yamada Taro");
        assert_eq!(row.status_label, "提案中");
        assert_eq!(row.status.as_deref(), Some("proposal"));
        assert_eq!(row.first_meeting_date, "3/4");
        assert_eq!(row.next_meeting_date, "7/4");
        assert_eq!(row.lead_source, EMPTY_DISPLAY);
        assert_eq!(row.counterparts[0].rank, Some(Rank::B));

        let contents: Vec<_> = row.next_actions.iter().map(|a| a.content.as_str()).collect();
        assert_eq!(contents, vec!["Quote", "Call"]);
        assert_eq!(row.next_actions[0].deadline.text, "3 days overdue");

        assert_eq!(row.last_activity.elapsed_days, 14);
        assert_eq!(row.last_activity.display_text, "2 weeks");
    }

    #[test]
    fn customer_without_activity_shows_placeholders() {
        let record = CustomerRecord::new(customer(None, None));

        let row = CustomerListRow::build(&record, &UserDirectory::default(), &now());

        assert_eq!(row.assignee_name, EMPTY_DISPLAY);
        assert_eq!(row.status_label, EMPTY_DISPLAY);
        assert_eq!(row.first_meeting_date, EMPTY_DISPLAY);
        assert_eq!(row.last_activity.display_text, "—");
        assert_eq!(row.last_activity.elapsed_days, 0);
        assert!(!row.last_activity.stale);
        assert!(row.next_actions.is_empty());
    }

    #[test]
    fn unrecognized_status_shows_raw_value() {
        let record = CustomerRecord::new(customer(None, Some(CustomerStatus::parse("on hold"))));
        let row = CustomerListRow::build(&record, &UserDirectory::default(), &now());
        assert_eq!(row.status_label, "on hold");
    }
}
