//! Analysis service endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_endpoint() -> String {
    "http://localhost:8000/analyze/".to_string()
}

fn default_health_endpoint() -> String {
    "http://localhost:8000/health/".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("greencheck/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// URL that receives `POST {"url": ...}` analysis requests.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// URL answering `GET` with `{"status", "message"}`.
    #[serde(default = "default_health_endpoint")]
    pub health_endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            health_endpoint: default_health_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl AnalysisConfig {
    /// Whether the analysis endpoint is set to something usable.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        is_http_url(&self.endpoint)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("analysis.endpoint", &self.endpoint),
            ("analysis.health_endpoint", &self.health_endpoint),
        ] {
            if !is_http_url(value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("'{value}' is not an http(s) URL"),
                });
            }
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let config = AnalysisConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8000/analyze/");
        assert_eq!(config.health_endpoint, "http://localhost:8000/health/");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent.starts_with("greencheck/"));
        assert!(config.is_configured());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = AnalysisConfig {
            endpoint: "localhost:8000".into(),
            ..AnalysisConfig::default()
        };
        assert!(!config.is_configured());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("analysis.endpoint"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = AnalysisConfig {
            timeout_secs: 0,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
