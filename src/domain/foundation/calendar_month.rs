//! Calendar month value object.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::Timestamp;

/// A (year, month) pair in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Returns the month containing the timestamp.
    pub fn of(ts: &Timestamp) -> Self {
        let date = ts.date();
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Creates a month, returning `None` unless `month` is 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_index(index: i64) -> Self {
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) + 1;
        Self {
            year: year as i32,
            month: month as u32,
        }
    }

    /// Shifts by a signed number of months.
    pub fn offset(&self, months: i64) -> Self {
        Self::from_index(self.index() + months)
    }

    /// Signed month count from `other` to `self`.
    pub fn months_since(&self, other: &CalendarMonth) -> i64 {
        self.index() - other.index()
    }

    /// First instant of the month (UTC midnight on day 1).
    pub fn start(&self) -> Timestamp {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(Timestamp::from_date)
            .unwrap_or_default()
    }

    /// First instant of the following month.
    pub fn end_exclusive(&self) -> Timestamp {
        self.offset(1).start()
    }

    /// Checks whether the timestamp falls in this month.
    pub fn contains(&self, ts: &Timestamp) -> bool {
        CalendarMonth::of(ts) == *self
    }

    /// Chart axis label, e.g. `4月`.
    pub fn label(&self) -> String {
        format!("{}月", self.month)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(y: i32, m: u32) -> CalendarMonth {
        CalendarMonth::new(y, m).unwrap()
    }

    #[test]
    fn rejects_invalid_month_numbers() {
        assert!(CalendarMonth::new(2024, 0).is_none());
        assert!(CalendarMonth::new(2024, 13).is_none());
    }

    #[test]
    fn offset_wraps_across_years() {
        assert_eq!(month(2024, 2).offset(-5), month(2023, 9));
        assert_eq!(month(2024, 11).offset(3), month(2025, 2));
        assert_eq!(month(2024, 1).offset(0), month(2024, 1));
    }

    #[test]
    fn months_since_is_signed() {
        assert_eq!(month(2024, 6).months_since(&month(2024, 1)), 5);
        assert_eq!(month(2024, 1).months_since(&month(2024, 6)), -5);
        assert_eq!(month(2025, 1).months_since(&month(2024, 12)), 1);
    }

    #[test]
    fn bounds_cover_the_whole_month() {
        let feb = month(2024, 2);
        assert_eq!(feb.start(), Timestamp::from_ymd(2024, 2, 1).unwrap());
        assert_eq!(feb.end_exclusive(), Timestamp::from_ymd(2024, 3, 1).unwrap());
        assert!(feb.contains(&Timestamp::parse("2024-02-29T23:59:59Z").unwrap()));
        assert!(!feb.contains(&Timestamp::from_ymd(2024, 3, 1).unwrap()));
    }

    #[test]
    fn label_uses_month_number() {
        assert_eq!(month(2024, 4).label(), "4月");
        assert_eq!(month(2023, 12).label(), "12月");
        assert_eq!(month(2023, 12).to_string(), "2023-12");
    }
}
