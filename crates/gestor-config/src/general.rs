//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// `tracing` filter directive (e.g., `"gestor_server=debug"`).
    ///
    /// Empty means the CLI verbosity flags decide. `GESTOR_LOG` still wins.
    #[serde(default)]
    pub log_filter: String,
}

impl GeneralConfig {
    /// The configured filter, if one was set.
    pub fn log_filter(&self) -> Option<&str> {
        let filter = self.log_filter.trim();
        (!filter.is_empty()).then_some(filter)
    }
}
