//! Command handlers for the `gestor` binary.

pub mod migrate;
pub mod serve;

use gestor_config::GestorConfig;

use crate::cli::{Commands, DatabaseArgs};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, config: &GestorConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => serve::handle(&args, config).await,
        Commands::Migrate(args) => migrate::handle(&args, config).await,
    }
}

/// Database path from `--db`, falling back to `database.path`.
///
/// # Errors
///
/// Fails when neither source names a database.
pub fn resolve_db_path(args: &DatabaseArgs, config: &GestorConfig) -> anyhow::Result<String> {
    match args.db.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => Ok(path.to_string()),
        _ => Ok(config.database.require_path()?.to_string()),
    }
}
