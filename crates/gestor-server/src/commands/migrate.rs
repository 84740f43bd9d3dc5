use anyhow::Context;
use gestor_config::GestorConfig;
use gestor_db::GestorDb;
use tracing::info;

use crate::cli::DatabaseArgs;

/// Handle `gestor migrate`.
///
/// Opening the database applies every embedded migration.
pub async fn handle(args: &DatabaseArgs, config: &GestorConfig) -> anyhow::Result<()> {
    let path = super::resolve_db_path(args, config)?;
    GestorDb::open_local(&path)
        .await
        .with_context(|| format!("failed to migrate database at {path}"))?;

    info!(path = %path, "migrations applied");
    println!("migrations applied to {path}");
    Ok(())
}
