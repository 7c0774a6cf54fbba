//! Route parsed commands to their handlers.

use crate::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::{check, run, status};
use crate::error::Result;

/// Apply global output flags and run the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        &cli.color,
    ));

    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Status(args) => status::execute(&args.config).await,
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
    }
}
