//! Classifier gateway configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_url() -> String {
    "http://127.0.0.1:8080/api".to_string()
}

/// Default request deadline in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "verifact/0.1".to_string()
}

/// Response contract spoken by the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayContract {
    /// Verdict token inside the first `<h1>` of an HTML page.
    #[default]
    Html,
    /// Structured `{"verdict": ..., "confidence": ...}` body.
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Endpoint that receives the multipart form (e.g., `http://127.0.0.1:8080/api`).
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub contract: GatewayContract,

    /// Give up on a classification after this many seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            contract: GatewayContract::default(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GatewayConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "gateway.url",
                format!("'{}' is not an http(s) URL", self.url),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "gateway.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
