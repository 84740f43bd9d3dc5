use clap::{Args, Subcommand};

/// Commands understood by the `gestor` binary.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Apply database migrations and exit
    Migrate(DatabaseArgs),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ServeArgs {
    /// Socket address to listen on (overrides `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct DatabaseArgs {
    /// Database file path or `:memory:` (overrides `database.path`)
    #[arg(long)]
    pub db: Option<String>,
}
