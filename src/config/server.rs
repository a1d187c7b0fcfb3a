//! HTTP listener settings for the CRM API.

use axum::http::HeaderValue;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Where and how the API listens.
///
/// `BOOST_CRM__SERVER__HOST`, `__PORT`, `__ENVIRONMENT`, `__LOG_LEVEL`,
/// `__REQUEST_TIMEOUT_SECS` and `__CORS_ORIGINS` map onto the fields below.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Selects JSON logs in production.
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Upper bound for one API request, in seconds (1..=300).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins of the CRM front end. Unset allows any.
    pub cors_origins: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Front-end origins allowed by CORS, as header values.
    ///
    /// Empty when unset; blank entries between commas are skipped.
    ///
    /// # Errors
    ///
    /// - `InvalidCorsOrigin` for an entry that is not an `http(s)://` origin
    pub fn allowed_origins(&self) -> Result<Vec<HeaderValue>, ValidationError> {
        let Some(raw) = &self.cors_origins else {
            return Ok(Vec::new());
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                let scheme_ok = origin.starts_with("http://") || origin.starts_with("https://");
                match HeaderValue::from_str(origin) {
                    Ok(value) if scheme_ok => Ok(value),
                    _ => Err(ValidationError::InvalidCorsOrigin(origin.to_string())),
                }
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        self.allowed_origins()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,boost_crm=debug,sqlx=warn".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_origins(origins: &str) -> ServerConfig {
        ServerConfig {
            cors_origins: Some(origins.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_listen_on_8080_in_development() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert!(!config.is_production());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.log_level.contains("boost_crm=debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparseable_host_fails_validation() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidHost(host)) if host == "not a host"
        ));
    }

    #[test]
    fn port_zero_and_out_of_range_timeouts_fail_validation() {
        let port_zero = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(port_zero.validate(), Err(ValidationError::InvalidPort)));

        for secs in [0, 301] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }
    }

    #[test]
    fn front_end_origins_are_trimmed_and_blank_entries_skipped() {
        let origins = with_origins(" http://localhost:3000, ,https://crm.example.com ")
            .allowed_origins()
            .unwrap();

        assert_eq!(origins, vec!["http://localhost:3000", "https://crm.example.com"]);
    }

    #[test]
    fn unset_origins_allow_any() {
        assert!(ServerConfig::default().allowed_origins().unwrap().is_empty());
    }

    #[test]
    fn origin_without_scheme_fails_validation() {
        let config = with_origins("https://crm.example.com,crm.internal");
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCorsOrigin(origin)) if origin == "crm.internal"
        ));
    }

    #[test]
    fn staging_is_not_an_environment() {
        let parsed: Result<Environment, _> = serde_json::from_str("\"staging\"");
        assert!(parsed.is_err());
        let parsed: Environment = serde_json::from_str("\"production\"").unwrap();
        assert_eq!(parsed, Environment::Production);
    }
}
