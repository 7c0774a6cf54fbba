//! Command-line interface definitions.
//!
//! Defines the CLI structure for launchd-docker using `clap`. The daemon
//! itself is the `run` subcommand; `check` and `status` inspect the
//! configuration and the host without starting anything.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keep a Lima VM and a set of docker compose projects running
#[derive(Parser, Debug)]
#[command(name = "launchd-docker")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the VM and services, then stop services on SIGINT/SIGTERM
    Run(RunArgs),

    /// Show VM status and service readiness without changing anything
    Status(StatusArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `launchd-docker check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Override the configured log level (e.g. "debug", "info,launchd_docker=trace").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `status` subcommand.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "launchd-docker");
    }

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from(["launchd-docker", "run", "-c", "/etc/ld.toml"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.config, PathBuf::from("/etc/ld.toml"));
                assert!(args.log_level.is_none());
                assert!(!args.json_logs);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_run_requires_config() {
        assert!(Cli::try_parse_from(["launchd-docker", "run"]).is_err());
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "launchd-docker",
            "run",
            "--config",
            "ld.toml",
            "--log-level",
            "debug",
            "--json-logs",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);
    }

    #[test]
    fn test_parse_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["launchd-docker", "run", "-c", "x.toml", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_check_config() {
        let cli =
            Cli::try_parse_from(["launchd-docker", "check", "config", "--config", "x.toml"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Config(ConfigPathArg { .. }))
        ));
    }

    #[test]
    fn test_parse_status_json() {
        let cli =
            Cli::try_parse_from(["launchd-docker", "--json", "status", "-c", "x.toml"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Status(_)));
    }

    #[test]
    fn test_parse_color_never() {
        let cli = Cli::try_parse_from([
            "launchd-docker",
            "--color",
            "never",
            "status",
            "-c",
            "x.toml",
        ])
        .unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }
}
