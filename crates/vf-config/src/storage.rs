//! Local key-value store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_file_name() -> String {
    "store.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the store file. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            file_name: default_file_name(),
        }
    }
}

impl StorageConfig {
    /// Directory the store lives in, falling back to `<data_dir>/verifact`
    /// and finally `./.verifact` when the platform has no data directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".verifact"), |dir| dir.join("verifact"))
    }

    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.file_name)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::invalid("storage.file_name", "must not be empty"));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "storage.file_name",
                "must be a bare file name",
            ));
        }
        Ok(())
    }
}
