//! Failures raised while loading or interpreting Gestor settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `GESTOR_*` variable could not be read, or holds a
    /// value of the wrong type.
    #[error("could not load gestor settings: {0}")]
    Load(#[from] figment::Error),

    /// `database.path` is blank and no `--db` was given.
    #[error("no database configured: set database.path or pass --db")]
    MissingDatabasePath,

    /// A listen address (`server.bind` or `--bind`) is not `host:port`.
    #[error("invalid listen address '{value}': {reason}")]
    InvalidBind { value: String, reason: String },
}
