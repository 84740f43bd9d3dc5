//! libSQL database configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Path used when no database is configured.
fn default_path() -> String {
    "gestor.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:` for a throwaway database.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Return the configured path, rejecting an empty one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingDatabasePath` if `path` is blank.
    pub fn require_path(&self) -> Result<&str, ConfigError> {
        let path = self.path.trim();
        if path.is_empty() {
            return Err(ConfigError::MissingDatabasePath);
        }
        Ok(path)
    }
}
