//! # gestor-config
//!
//! Settings for the `gestor` binary: where the subject database lives, which
//! address the HTTP server listens on, and an optional log filter.
//!
//! Later sources override earlier ones:
//!
//! | Source | Example |
//! |--------|---------|
//! | built-in defaults | `database.path = "gestor.db"` |
//! | `~/.config/gestor/config.toml` | per-user settings |
//! | `.gestor/config.toml` | per-checkout settings |
//! | `GESTOR_<SECTION>__<KEY>` | `GESTOR_SERVER__BIND=0.0.0.0:8080` |
//!
//! ```no_run
//! let config = gestor_config::GestorConfig::load_with_dotenv().expect("config");
//! let addr = config.server.socket_addr().expect("bind address");
//! println!("{} on {addr}", config.database.path);
//! ```

mod database;
mod error;
mod general;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::{ServerConfig, parse_bind};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "GESTOR_";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GestorConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GestorConfig {
    /// Resolve settings from defaults, config files, and `GESTOR_*` variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source cannot be read or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Like [`Self::load`], after exporting a `.env` from the working
    /// directory into the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Provider chain behind [`Self::load`], exposed for tests.
    pub fn figment() -> Figment {
        Self::config_files()
            .into_iter()
            .filter(|path| path.exists())
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Candidate TOML files, lowest priority first.
    fn config_files() -> Vec<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("gestor").join(CONFIG_FILE))
            .into_iter()
            .chain(std::iter::once(PathBuf::from(".gestor").join(CONFIG_FILE)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GestorConfig::default();
        assert_eq!(config.database.path, "gestor.db");
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.general.log_filter(), None);
    }

    #[test]
    fn project_file_outranks_user_file() {
        let files = GestorConfig::config_files();
        assert_eq!(files.last(), Some(&PathBuf::from(".gestor/config.toml")));
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: GestorConfig = GestorConfig::figment().extract()?;
            assert_eq!(config.database.path, "gestor.db");
            assert!(config.server.socket_addr().is_ok());
            Ok(())
        });
    }
}
