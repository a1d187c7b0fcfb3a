//! Date text as stored by the persistence layer.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Timestamp, ValidationError};

/// A stored date that is parsed on use.
///
/// Meeting dates, due dates and scheduling dates arrive as text. Values that
/// do not parse are kept verbatim and simply yield `None` from [`parse`],
/// so one bad row never breaks a whole view.
///
/// [`parse`]: RecordDate::parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDate(String);

impl RecordDate {
    /// Wraps stored text without validation.
    pub fn from_raw(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Wraps user input, rejecting empty or unparseable text.
    pub fn new(field: &str, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if Timestamp::parse(&text).is_none() {
            return Err(ValidationError::invalid_format(
                field,
                format!("'{}' is not a date", text),
            ));
        }
        Ok(Self(text))
    }

    /// Formats a timestamp as a `YYYY-MM-DD` date.
    pub fn from_timestamp(ts: &Timestamp) -> Self {
        Self(ts.date().format("%Y-%m-%d").to_string())
    }

    /// Returns the stored text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the stored text, `None` when malformed.
    pub fn parse(&self) -> Option<Timestamp> {
        Timestamp::parse(&self.0)
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_keep_malformed_text() {
        let date = RecordDate::from_raw("31/02/2024");
        assert_eq!(date.as_str(), "31/02/2024");
        assert!(date.parse().is_none());
    }

    #[test]
    fn new_rejects_blank_input() {
        let err = RecordDate::new("meeting_date", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Field 'meeting_date' cannot be empty");
    }

    #[test]
    fn new_rejects_unparseable_input() {
        assert!(matches!(
            RecordDate::new("due_date", "soon"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn new_trims_valid_input() {
        let date = RecordDate::new("due_date", " 2024-06-10 ").unwrap();
        assert_eq!(date.as_str(), "2024-06-10");
        assert_eq!(date.parse(), Timestamp::from_ymd(2024, 6, 10));
    }

    #[test]
    fn from_timestamp_writes_iso_date() {
        let ts = Timestamp::parse("2024-06-10T15:00:00Z").unwrap();
        assert_eq!(RecordDate::from_timestamp(&ts).as_str(), "2024-06-10");
    }
}
