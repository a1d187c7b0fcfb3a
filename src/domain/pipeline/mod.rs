//! Pipeline reporting: effective status and monthly cohorts.

mod classifier;
mod cohort;
mod window;

pub use classifier::{classify, classify_customer, EffectiveStatus, RECYCLE_AFTER_MONTHS};
pub use cohort::{new_meetings_series, status_distribution_series, MonthlyCount, StatusMonth};
pub use window::{TrailingWindow, WINDOW_MONTHS};
