use std::net::SocketAddr;

use anyhow::Context;
use gestor_config::{GestorConfig, parse_bind};
use gestor_db::GestorDb;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::cli::ServeArgs;
use crate::http::{AppState, app};

/// Handle `gestor serve`: open the store, bind, and serve until Ctrl-C.
pub async fn handle(args: &ServeArgs, config: &GestorConfig) -> anyhow::Result<()> {
    let addr = resolve_bind(args, config)?;
    let path = super::resolve_db_path(&args.database, config)?;

    let db = GestorDb::open_local(&path)
        .await
        .with_context(|| format!("failed to open database at {path}"))?;
    if path == gestor_db::MEMORY_PATH {
        warn!("serving from an in-memory database; subjects are lost on exit");
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, db = %path, "gestor listening");

    axum::serve(listener, app(AppState::new(db)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    info!("gestor stopped");
    Ok(())
}

fn resolve_bind(args: &ServeArgs, config: &GestorConfig) -> anyhow::Result<SocketAddr> {
    match args.bind.as_deref() {
        Some(raw) => Ok(parse_bind(raw)?),
        None => Ok(config.server.socket_addr()?),
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
