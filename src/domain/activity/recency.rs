//! Activity recency: time since a customer was last worked on.

use serde::Serialize;
use std::fmt;

use crate::domain::customer::{Meeting, NextAction};
use crate::domain::foundation::{Timestamp, EMPTY_DISPLAY};

use super::{extract_activity_facts, ActivityFact};

/// Elapsed days at which a row is highlighted as stale.
pub const STALE_AFTER_DAYS: i64 = 30;

/// Human-readable bucket for elapsed days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyBucket {
    NoActivity,
    Today,
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

impl RecencyBucket {
    /// Buckets a non-negative day count.
    pub fn from_elapsed_days(days: i64) -> Self {
        match days {
            d if d <= 0 => RecencyBucket::Today,
            d if d < 7 => RecencyBucket::Days(d),
            d if d < 30 => RecencyBucket::Weeks(d / 7),
            d if d < 365 => RecencyBucket::Months(d / 30),
            d => RecencyBucket::Years(d / 365),
        }
    }
}

impl fmt::Display for RecencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecencyBucket::NoActivity => f.write_str(EMPTY_DISPLAY),
            RecencyBucket::Today => f.write_str("today"),
            RecencyBucket::Days(1) => f.write_str("1 day"),
            RecencyBucket::Days(d) => write!(f, "{} days", d),
            RecencyBucket::Weeks(w) => write!(f, "{} weeks", w),
            RecencyBucket::Months(m) => write!(f, "{} months", m),
            RecencyBucket::Years(y) => write!(f, "{} years", y),
        }
    }
}

/// Time since the most recent activity fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecency {
    pub last_activity_at: Option<Timestamp>,
    pub elapsed_days: i64,
    pub display_text: String,
    pub stale: bool,
}

impl ActivityRecency {
    /// The "no activity" sentinel: zero days, placeholder text, never stale.
    pub fn none() -> Self {
        Self {
            last_activity_at: None,
            elapsed_days: 0,
            display_text: RecencyBucket::NoActivity.to_string(),
            stale: false,
        }
    }

    /// Recency of the latest fact relative to `now`.
    pub fn from_facts(facts: &[ActivityFact], now: &Timestamp) -> Self {
        let Some(latest) = facts.iter().map(|fact| fact.occurred_at).max() else {
            return Self::none();
        };
        let elapsed_days = now.whole_days_since(&latest).max(0);
        Self {
            last_activity_at: Some(latest),
            elapsed_days,
            display_text: RecencyBucket::from_elapsed_days(elapsed_days).to_string(),
            stale: elapsed_days >= STALE_AFTER_DAYS,
        }
    }

    /// Extracts facts from a customer's records and measures recency.
    pub fn for_customer(meetings: &[Meeting], next_actions: &[NextAction], now: &Timestamp) -> Self {
        let facts = extract_activity_facts(meetings, next_actions, now);
        Self::from_facts(&facts, now)
    }

    pub fn has_activity(&self) -> bool {
        self.last_activity_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::ActivitySource;
    use proptest::prelude::*;

    fn now() -> Timestamp {
        Timestamp::parse("2024-06-15T12:00:00Z").unwrap()
    }

    fn fact_days_ago(days: i64) -> ActivityFact {
        ActivityFact {
            source: ActivitySource::Meeting,
            occurred_at: now().minus_days(days),
        }
    }

    #[test]
    fn bucket_boundaries() {
        let cases = [
            (0, "today"),
            (1, "1 day"),
            (6, "6 days"),
            (7, "1 weeks"),
            (29, "4 weeks"),
            (30, "1 months"),
            (364, "12 months"),
            (365, "1 years"),
            (800, "2 years"),
        ];
        for (days, expected) in cases {
            assert_eq!(
                RecencyBucket::from_elapsed_days(days).to_string(),
                expected,
                "days = {}",
                days
            );
        }
    }

    #[test]
    fn no_facts_yields_sentinel() {
        let recency = ActivityRecency::from_facts(&[], &now());
        assert_eq!(recency.elapsed_days, 0);
        assert_eq!(recency.display_text, "—");
        assert!(!recency.stale);
        assert!(!recency.has_activity());
    }

    #[test]
    fn uses_most_recent_fact() {
        let recency = ActivityRecency::from_facts(&[fact_days_ago(40), fact_days_ago(3)], &now());
        assert_eq!(recency.elapsed_days, 3);
        assert_eq!(recency.display_text, "3 days");
        assert_eq!(recency.last_activity_at, Some(now().minus_days(3)));
    }

    #[test]
    fn partial_days_are_floored() {
        let facts = [ActivityFact {
            source: ActivitySource::Meeting,
            occurred_at: Timestamp::parse("2024-06-14T13:00:00Z").unwrap(),
        }];
        let recency = ActivityRecency::from_facts(&facts, &now());
        assert_eq!(recency.elapsed_days, 0);
        assert_eq!(recency.display_text, "today");
    }

    #[test]
    fn future_facts_clamp_to_zero() {
        let recency = ActivityRecency::from_facts(&[fact_days_ago(-5)], &now());
        assert_eq!(recency.elapsed_days, 0);
    }

    #[test]
    fn stale_from_thirty_days() {
        assert!(!ActivityRecency::from_facts(&[fact_days_ago(29)], &now()).stale);
        assert!(ActivityRecency::from_facts(&[fact_days_ago(30)], &now()).stale);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let facts = [fact_days_ago(12), fact_days_ago(100)];
        let first = ActivityRecency::from_facts(&facts, &now());
        let second = ActivityRecency::from_facts(&facts, &now());
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn adding_facts_never_increases_elapsed_days(
            base in prop::collection::vec(0i64..2000, 0..8),
            extra in prop::collection::vec(0i64..2000, 0..8),
        ) {
            let subset: Vec<_> = base.iter().copied().map(fact_days_ago).collect();
            let superset: Vec<_> = base.iter().chain(extra.iter()).copied().map(fact_days_ago).collect();

            let a = ActivityRecency::from_facts(&subset, &now());
            let b = ActivityRecency::from_facts(&superset, &now());

            if a.has_activity() {
                prop_assert!(a.elapsed_days >= b.elapsed_days);
            }
        }
    }
}
