//! Settings store port.
//!
//! Loaded once at startup, saved whenever a setting changes.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::settings::CrmSettings;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Reads persisted settings; defaults when nothing was saved yet.
    async fn load(&self) -> Result<CrmSettings, SettingsError>;

    async fn save(&self, settings: &CrmSettings) -> Result<(), SettingsError>;
}

/// Errors that can occur while reading or writing settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is malformed: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Malformed(err.to_string())
    }
}

impl From<SettingsError> for DomainError {
    fn from(err: SettingsError) -> Self {
        DomainError::new(ErrorCode::SettingsError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SettingsStore) {}
    }

    #[test]
    fn json_errors_are_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SettingsError = json_err.into();
        assert!(matches!(err, SettingsError::Malformed(_)));
    }
}
