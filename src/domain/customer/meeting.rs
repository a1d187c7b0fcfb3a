//! Recorded sales meetings.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    normalize_optional, CustomerId, DomainError, MeetingId, RecordDate, UserId,
};

/// Form input for recording or editing a meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    pub meeting_date: String,
    pub minutes: Option<String>,
    pub google_drive_link: Option<String>,
    pub circle_back_link: Option<String>,
    pub recorder_id: Option<UserId>,
}

/// A recorded sales interaction with a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    id: MeetingId,
    customer_id: CustomerId,
    meeting_date: RecordDate,
    minutes: Option<String>,
    google_drive_link: Option<String>,
    circle_back_link: Option<String>,
    recorder_id: Option<UserId>,
}

impl Meeting {
    /// Records a new meeting.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `InvalidFormat` if the meeting date is missing or not a date
    pub fn record(
        id: MeetingId,
        customer_id: CustomerId,
        details: MeetingDetails,
    ) -> Result<Self, DomainError> {
        let meeting_date = RecordDate::new("meeting_date", details.meeting_date)?;
        Ok(Self {
            id,
            customer_id,
            meeting_date,
            minutes: normalize_optional(details.minutes),
            google_drive_link: normalize_optional(details.google_drive_link),
            circle_back_link: normalize_optional(details.circle_back_link),
            recorder_id: details.recorder_id,
        })
    }

    /// Reconstitute a meeting from persistence (no validation).
    pub fn reconstitute(
        id: MeetingId,
        customer_id: CustomerId,
        meeting_date: RecordDate,
        minutes: Option<String>,
        google_drive_link: Option<String>,
        circle_back_link: Option<String>,
        recorder_id: Option<UserId>,
    ) -> Self {
        Self {
            id,
            customer_id,
            meeting_date,
            minutes,
            google_drive_link,
            circle_back_link,
            recorder_id,
        }
    }

    /// Replaces all fields of the meeting.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `InvalidFormat` if the meeting date is missing or not a date;
    ///   the meeting is unchanged
    pub fn edit(&mut self, details: MeetingDetails) -> Result<(), DomainError> {
        let edited = Self::record(self.id, self.customer_id, details)?;
        *self = edited;
        Ok(())
    }

    pub fn id(&self) -> &MeetingId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn meeting_date(&self) -> &RecordDate {
        &self.meeting_date
    }

    pub fn minutes(&self) -> Option<&str> {
        self.minutes.as_deref()
    }

    pub fn google_drive_link(&self) -> Option<&str> {
        self.google_drive_link.as_deref()
    }

    pub fn circle_back_link(&self) -> Option<&str> {
        self.circle_back_link.as_deref()
    }

    pub fn recorder_id(&self) -> Option<&UserId> {
        self.recorder_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Timestamp};

    fn details(date: &str) -> MeetingDetails {
        MeetingDetails {
            meeting_date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn record_requires_a_meeting_date() {
        let err = Meeting::record(MeetingId::new(), CustomerId::new(), details("")).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }

    #[test]
    fn record_rejects_malformed_dates() {
        let err = Meeting::record(MeetingId::new(), CustomerId::new(), details("tomorrow")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn record_normalizes_optional_text() {
        let input = MeetingDetails {
            minutes: Some("  ".to_string()),
            google_drive_link: Some(" https://drive.example/doc ".to_string()),
            ..details("2024-04-02")
        };
        let meeting = Meeting::record(MeetingId::new(), CustomerId::new(), input).unwrap();

        assert_eq!(meeting.minutes(), None);
        assert_eq!(meeting.google_drive_link(), Some("https://drive.example/doc"));
        assert_eq!(meeting.meeting_date().parse(), Timestamp::from_ymd(2024, 4, 2));
    }

    #[test]
    fn edit_keeps_identity() {
        let mut meeting =
            Meeting::record(MeetingId::new(), CustomerId::new(), details("2024-04-02")).unwrap();
        let id = *meeting.id();
        let customer_id = *meeting.customer_id();

        meeting.edit(details("2024-04-09")).unwrap();

        assert_eq!(meeting.id(), &id);
        assert_eq!(meeting.customer_id(), &customer_id);
        assert_eq!(meeting.meeting_date().as_str(), "2024-04-09");
    }

    #[test]
    fn failed_edit_leaves_meeting_unchanged() {
        let mut meeting =
            Meeting::record(MeetingId::new(), CustomerId::new(), details("2024-04-02")).unwrap();
        let before = meeting.clone();

        assert!(meeting.edit(details("")).is_err());
        assert_eq!(meeting, before);
    }
}
