//! CLI definition for the `parley` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parley - a minimal chat-storage HTTP service.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "PARLEY_OTEL")]
    pub otel: bool,

    /// Path to the config file. Defaults to `config.toml` in the data directory.
    #[arg(long, global = true, env = "PARLEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite connection URL, overriding the config file.
    #[arg(long, global = true, env = "PARLEY_DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Interface to bind.
        #[arg(long, env = "PARLEY_HOST")]
        host: Option<String>,

        /// Port to bind.
        #[arg(short, long, env = "PARLEY_PORT")]
        port: Option<u16>,
    },

    /// Apply database migrations and exit.
    Migrate,
}

impl Cli {
    /// Default log filter derived from `--quiet` and `-v`.
    ///
    /// `RUST_LOG` still takes precedence when set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,parley=debug,tower_http=debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "parley",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();

        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(9000));
            }
            Commands::Migrate => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_migrate() {
        let cli = Cli::try_parse_from(["parley", "migrate"]).unwrap();
        assert!(matches!(cli.command, Commands::Migrate));
    }

    #[test]
    fn test_log_filter_from_verbosity() {
        let quiet = Cli::try_parse_from(["parley", "--quiet", "migrate"]).unwrap();
        assert_eq!(quiet.log_filter(), "error");

        let default = Cli::try_parse_from(["parley", "migrate"]).unwrap();
        assert_eq!(default.log_filter(), "info");

        let debug = Cli::try_parse_from(["parley", "-v", "migrate"]).unwrap();
        assert!(debug.log_filter().contains("parley=debug"));

        let trace = Cli::try_parse_from(["parley", "-vv", "migrate"]).unwrap();
        assert_eq!(trace.log_filter(), "trace");
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["parley"]).is_err());
    }
}
