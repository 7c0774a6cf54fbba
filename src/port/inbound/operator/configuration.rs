//! Configuration projections for operator-facing adapters.

use crate::error::Result;

/// One configured service as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceView {
    pub name: String,
    pub path: String,
    /// Deployment file that will be used, override or default.
    pub compose_file: String,
    pub compose_file_overridden: bool,
}

/// Summary output for `check config`.
#[derive(Debug, Clone)]
pub struct ConfigCheckReport {
    pub lima_instance: String,
    pub limactl: String,
    pub docker: String,
    pub poll_interval_ms: u64,
    pub max_attempts: u32,
    pub log_level: String,
    pub log_format: String,
    /// Services in start order.
    pub services: Vec<ServiceView>,
}

/// Configuration use-cases.
pub trait ConfigurationOperator: Send + Sync {
    /// Parse and validate configuration without touching the VM or services.
    fn check_config(&self, config_toml: &str) -> Result<ConfigCheckReport>;
}
