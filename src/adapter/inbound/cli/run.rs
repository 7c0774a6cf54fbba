//! Handler for the `run` command.

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::runtime::{RunRequest, RunStartupSnapshot, RunSummary};

/// Execute the run command.
///
/// Blocks until SIGINT or SIGTERM and every service has been stopped.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(&args.config)?;
    let request = build_run_request(args, config_toml, output::verbosity());
    let service = operator::operator();

    let startup = service.prepare_run(&request)?;
    print_startup(&startup);

    let summary = service.execute_run(request).await?;
    print_summary(&summary);
    Ok(())
}

fn build_run_request(args: &RunArgs, config_toml: String, verbosity: u8) -> RunRequest {
    RunRequest {
        config_toml,
        log_level: args.log_level.clone(),
        json_logs: args.json_logs,
        verbose: verbosity > 0,
    }
}

fn print_startup(snapshot: &RunStartupSnapshot) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Instance", &snapshot.lima_instance);
    output::field("Services", snapshot.service_names.join(", "));
}

fn print_summary(summary: &RunSummary) {
    if summary.cancelled_before_start {
        output::note("Shutdown requested before services were started");
        return;
    }

    output::section("Summary");
    if summary.start_aborted {
        output::warning("Service validation failed; nothing was started");
    } else {
        output::field("Started", summary.started);
    }
    for name in &summary.start_failures {
        output::warning(&format!("{name} failed to start"));
    }

    output::field("Stopped", summary.stopped);
    for name in &summary.stop_failures {
        output::warning(&format!("{name} failed to stop"));
    }

    if summary.stop_failures.is_empty() {
        output::success("Shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn args() -> RunArgs {
        RunArgs {
            config: PathBuf::from("ld.toml"),
            log_level: None,
            json_logs: false,
        }
    }

    #[test]
    fn verbosity_sets_verbose_flag() {
        assert!(!build_run_request(&args(), String::new(), 0).verbose);
        assert!(build_run_request(&args(), String::new(), 2).verbose);
    }

    #[test]
    fn request_carries_log_overrides() {
        let args = RunArgs {
            log_level: Some("debug".to_string()),
            json_logs: true,
            ..args()
        };
        let request = build_run_request(&args, "x = 1".to_string(), 0);
        assert_eq!(request.config_toml, "x = 1");
        assert_eq!(request.log_level.as_deref(), Some("debug"));
        assert!(request.json_logs);
    }
}
