//! Runtime control projection types for operator-facing adapters.

use async_trait::async_trait;

use crate::error::Result;

/// Runtime configuration overrides from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,

    /// Override for log level (e.g., "debug", "info", "warn").
    pub log_level: Option<String>,

    /// Whether to output logs as JSON.
    pub json_logs: bool,

    /// Raise the log level to `debug` unless `log_level` is set.
    pub verbose: bool,
}

/// Startup details shown before the daemon begins.
#[derive(Debug, Clone)]
pub struct RunStartupSnapshot {
    pub lima_instance: String,
    pub service_names: Vec<String>,
}

/// How a daemon run ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Shutdown arrived before the VM became healthy.
    pub cancelled_before_start: bool,
    /// Validation aborted the start batch.
    pub start_aborted: bool,
    pub started: usize,
    pub start_failures: Vec<String>,
    pub stopped: usize,
    pub stop_failures: Vec<String>,
}

/// Runtime use-cases.
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Validate the request and describe what will run.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot>;

    /// Run the daemon until SIGINT/SIGTERM, then stop every service.
    async fn execute_run(&self, request: RunRequest) -> Result<RunSummary>;
}
