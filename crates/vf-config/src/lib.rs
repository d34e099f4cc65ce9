//! # vf-config
//!
//! Layered configuration loading for VeriFact using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERIFACT_*` prefix, `__` as separator)
//! 2. Project-level `.verifact/config.toml`
//! 3. User-level `~/.config/verifact/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERIFACT_GATEWAY__URL` -> `gateway.url`,
//! `VERIFACT_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vf_config::VfConfig;
//!
//! let config = VfConfig::load_with_dotenv().expect("config");
//! println!("Gateway: {}", config.gateway.url);
//! ```

mod error;
mod gateway;
mod storage;

pub use error::ConfigError;
pub use gateway::{GatewayConfig, GatewayContract};
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for all VeriFact settings.
pub const ENV_PREFIX: &str = "VERIFACT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VfConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl VfConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".verifact/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make the client unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;
        self.storage.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verifact").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = VfConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gateway.contract, GatewayContract::Html);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: VfConfig = VfConfig::figment().extract()?;
            assert_eq!(config.gateway.url, "http://127.0.0.1:8080/api");
            assert_eq!(config.gateway.timeout_secs, 30);
            Ok(())
        });
    }
}
