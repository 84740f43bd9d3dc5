use anyhow::Context;
use clap::Parser;

use gestor_config::GestorConfig;
use gestor_server::{cli, commands};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("gestor error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = GestorConfig::load_with_dotenv().context("failed to load gestor configuration")?;
    init_tracing(cli.quiet, cli.verbose, config.general.log_filter())?;

    commands::dispatch(cli.into_command(), &config).await
}

/// Install the global subscriber.
///
/// `GESTOR_LOG` wins, then `general.log_filter` from config, then the level
/// implied by `--quiet` or `--verbose`.
fn init_tracing(quiet: bool, verbose: bool, configured: Option<&str>) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GESTOR_LOG").unwrap_or_else(|_| {
        match configured {
            Some(directives) if !quiet && !verbose => tracing_subscriber::EnvFilter::new(directives),
            _ => tracing_subscriber::EnvFilter::new(level),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
