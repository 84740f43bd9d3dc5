use clap::Parser;

pub mod root_commands;

pub use root_commands::{Commands, DatabaseArgs, ServeArgs};

/// Top-level CLI parser for the `gestor` binary.
#[derive(Debug, Parser)]
#[command(name = "gestor", version, about = "Gestor - course subject manager")]
pub struct Cli {
    /// Defaults to `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// The command to run, with a bare `gestor` meaning `gestor serve`.
    #[must_use]
    pub fn into_command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Serve(ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, DatabaseArgs, ServeArgs};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_serves_with_config_defaults() {
        let cli = Cli::try_parse_from(["gestor"]).expect("cli should parse");
        assert!(!cli.quiet);
        assert_eq!(cli.into_command(), Commands::Serve(ServeArgs::default()));
    }

    #[test]
    fn serve_flags_override_config() {
        let cli = Cli::try_parse_from([
            "gestor",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--db",
            "/tmp/subjects.db",
        ])
        .expect("cli should parse");

        assert_eq!(
            cli.into_command(),
            Commands::Serve(ServeArgs {
                bind: Some("0.0.0.0:9000".into()),
                database: DatabaseArgs {
                    db: Some("/tmp/subjects.db".into()),
                },
            })
        );
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["gestor", "migrate", "--verbose", "--db", ":memory:"])
            .expect("cli should parse");

        assert!(cli.verbose);
        assert_eq!(
            cli.into_command(),
            Commands::Migrate(DatabaseArgs {
                db: Some(":memory:".into()),
            })
        );
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["gestor", "seed"]).is_err());
    }
}
