//! Request bodies for meetings, counterparts and next actions.

use serde::Deserialize;

use crate::domain::customer::MeetingDetails;
use crate::domain::foundation::{Rank, UserId, ValidationError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    pub meeting_date: String,
    #[serde(default)]
    pub minutes: Option<String>,
    #[serde(default)]
    pub google_drive_link: Option<String>,
    #[serde(default)]
    pub circle_back_link: Option<String>,
    #[serde(default)]
    pub recorder_id: Option<UserId>,
}

impl From<MeetingRequest> for MeetingDetails {
    fn from(req: MeetingRequest) -> Self {
        MeetingDetails {
            meeting_date: req.meeting_date,
            minutes: req.minutes,
            google_drive_link: req.google_drive_link,
            circle_back_link: req.circle_back_link,
            recorder_id: req.recorder_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartRequest {
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
}

impl CounterpartRequest {
    /// Parses the rank; blank means unranked.
    pub fn parsed_rank(&self) -> Result<Option<Rank>, ValidationError> {
        self.rank
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::parse::<Rank>)
            .transpose()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextActionRequest {
    pub content: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<UserId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_request_maps_to_details() {
        let req: MeetingRequest = serde_json::from_str(
            r#"{"meetingDate":"2024-04-02","minutes":"Kickoff","circleBackLink":"https://cb"}"#,
        )
        .unwrap();

        let details = MeetingDetails::from(req);

        assert_eq!(details.meeting_date, "2024-04-02");
        assert_eq!(details.minutes.as_deref(), Some("Kickoff"));
        assert_eq!(details.google_drive_link, None);
    }

    #[test]
    fn counterpart_rank_blank_is_unranked() {
        let req = CounterpartRequest {
            name: "Sato".to_string(),
            rank: Some(" ".to_string()),
            ..CounterpartRequest::default()
        };
        assert_eq!(req.parsed_rank().unwrap(), None);
    }

    #[test]
    fn counterpart_rank_is_validated() {
        let ok = CounterpartRequest {
            rank: Some("A".to_string()),
            ..CounterpartRequest::default()
        };
        assert_eq!(ok.parsed_rank().unwrap(), Some(Rank::A));

        let bad = CounterpartRequest {
            rank: Some("Z".to_string()),
            ..CounterpartRequest::default()
        };
        assert!(bad.parsed_rank().is_err());
    }
}
