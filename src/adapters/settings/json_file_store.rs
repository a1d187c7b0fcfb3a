//! JSON file implementation of SettingsStore.
//!
//! The file is replaced atomically: the new content is written next to it
//! and renamed over the old one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::settings::{CrmSettings, SlackWebhookUrl};
use crate::ports::{SettingsError, SettingsStore};

/// On-disk representation.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slack_webhook_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn load(&self) -> Result<CrmSettings, SettingsError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(CrmSettings::default());
            }
            Err(err) => return Err(err.into()),
        };

        let file: SettingsFile = serde_json::from_slice(&bytes)?;
        let slack_webhook_url = match file.slack_webhook_url {
            Some(url) => SlackWebhookUrl::parse(&url)
                .map_err(|e| SettingsError::Malformed(e.to_string()))?,
            None => None,
        };
        Ok(CrmSettings { slack_webhook_url })
    }

    async fn save(&self, settings: &CrmSettings) -> Result<(), SettingsError> {
        let file = SettingsFile {
            slack_webhook_url: settings
                .slack_webhook_url
                .as_ref()
                .map(|url| url.expose().to_string()),
        };
        let json = serde_json::to_vec_pretty(&file)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let staging = self.staging_path();
        tokio::fs::write(&staging, json).await?;
        tokio::fs::rename(&staging, &self.path).await?;

        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}
