//! Trailing window of calendar months used by every dashboard chart.

use crate::domain::foundation::{CalendarMonth, Timestamp};

/// Number of months in the window, current month included.
pub const WINDOW_MONTHS: usize = 6;

/// The current month plus the five before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    current: CalendarMonth,
}

impl TrailingWindow {
    pub fn ending_at(now: &Timestamp) -> Self {
        Self {
            current: now.calendar_month(),
        }
    }

    pub fn current(&self) -> CalendarMonth {
        self.current
    }

    pub fn oldest(&self) -> CalendarMonth {
        self.current.offset(-(WINDOW_MONTHS as i64 - 1))
    }

    /// Months oldest first.
    pub fn months(&self) -> Vec<CalendarMonth> {
        let oldest = self.oldest();
        (0..WINDOW_MONTHS as i64).map(|i| oldest.offset(i)).collect()
    }

    /// Axis labels oldest first, e.g. `1月` .. `6月`.
    pub fn labels(&self) -> Vec<String> {
        self.months().iter().map(CalendarMonth::label).collect()
    }

    /// First instant inside the window.
    pub fn start(&self) -> Timestamp {
        self.oldest().start()
    }

    /// First instant after the window.
    pub fn end_exclusive(&self) -> Timestamp {
        self.current.end_exclusive()
    }

    /// Index of the month containing `ts`, or `None` when outside the window.
    pub fn position_of(&self, ts: &Timestamp) -> Option<usize> {
        let offset = ts.calendar_month().months_since(&self.oldest());
        usize::try_from(offset)
            .ok()
            .filter(|&index| index < WINDOW_MONTHS)
    }

    pub fn contains(&self, ts: &Timestamp) -> bool {
        self.position_of(ts).is_some()
    }
}
