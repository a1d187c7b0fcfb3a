//! Per-customer history: meetings and completed actions in one feed.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::customer::{Meeting, NextAction};
use crate::domain::foundation::{RecordDate, Timestamp, UserId};

/// Placeholder shown for meetings recorded without minutes.
pub const NO_MINUTES: &str = "(no minutes)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEntryKind {
    Meeting,
    Action,
}

/// One row of a customer's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: Uuid,
    pub kind: TimelineEntryKind,
    pub date: RecordDate,
    pub content: String,
    pub user_id: Option<UserId>,
    #[serde(skip)]
    occurred_at: Option<Timestamp>,
}

impl TimelineEntry {
    fn from_meeting(meeting: &Meeting) -> Self {
        Self {
            id: *meeting.id().as_uuid(),
            kind: TimelineEntryKind::Meeting,
            date: meeting.meeting_date().clone(),
            content: meeting.minutes().unwrap_or(NO_MINUTES).to_string(),
            user_id: meeting.recorder_id().copied(),
            occurred_at: meeting.meeting_date().parse(),
        }
    }

    fn from_completed_action(action: &NextAction) -> Self {
        let date = action
            .due_date()
            .cloned()
            .unwrap_or_else(|| RecordDate::from_timestamp(action.set_date()));
        Self {
            id: *action.id().as_uuid(),
            kind: TimelineEntryKind::Action,
            occurred_at: date.parse(),
            date,
            content: action.content().to_string(),
            user_id: action.assignee_id().copied(),
        }
    }
}

/// Builds the history feed, newest first.
///
/// Only completed actions appear. Entries whose date cannot be read sort
/// after every dated entry.
pub fn build_timeline(meetings: &[Meeting], next_actions: &[NextAction]) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = meetings
        .iter()
        .map(TimelineEntry::from_meeting)
        .chain(
            next_actions
                .iter()
                .filter(|action| !action.is_active())
                .map(TimelineEntry::from_completed_action),
        )
        .collect();
    entries.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    entries
}
