//! Activity module: what happened with a customer and when.
//!
//! - `facts` pulls dated activity out of meetings and completed actions
//! - `recency` turns the latest fact into a bucketed "last activity"
//! - `deadline` grades outstanding actions by due date
//! - `timeline` merges history for the detail view

mod deadline;
mod facts;
mod recency;
mod timeline;

pub use deadline::{sort_active_actions, DeadlineStatus, Urgency};
pub use facts::{extract_activity_facts, ActivityFact, ActivitySource};
pub use recency::{ActivityRecency, RecencyBucket, STALE_AFTER_DAYS};
pub use timeline::{build_timeline, TimelineEntry, TimelineEntryKind, NO_MINUTES};
