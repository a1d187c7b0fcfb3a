//! Sales team members (assignees and meeting recorders).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, EMPTY_DISPLAY};

/// A member of the sales team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub slack_id: Option<String>,
}

impl User {
    /// "{last} {first}", trimmed; `None` when both are blank.
    pub fn full_name(&self) -> Option<String> {
        let last = self.last_name.as_deref().unwrap_or("");
        let first = self.first_name.as_deref().unwrap_or("");
        let name = format!("{} {}", last, first).trim().to_string();
        (!name.is_empty()).then_some(name)
    }

    /// Full name or the empty placeholder.
    pub fn display_name(&self) -> String {
        self.full_name().unwrap_or_else(|| EMPTY_DISPLAY.to_string())
    }
}

/// Display name of an optional user.
pub fn assignee_display_name(user: Option<&User>) -> String {
    user.map(User::display_name)
        .unwrap_or_else(|| EMPTY_DISPLAY.to_string())
}
