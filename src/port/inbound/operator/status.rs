//! Status projections for operator-facing adapters.

use async_trait::async_trait;

use crate::error::Result;

/// Readiness of one service's compose project on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReadiness {
    pub name: String,
    pub path: String,
    pub compose_file: String,
    /// Why the service would fail validation, if it would.
    pub problem: Option<String>,
}

impl ServiceReadiness {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.problem.is_none()
    }
}

/// Output for `status`.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub lima_instance: String,
    /// Reported VM status, or the query error.
    pub vm_status: std::result::Result<String, String>,
    pub vm_running: bool,
    /// Services in start order.
    pub services: Vec<ServiceReadiness>,
}

impl StatusReport {
    /// True when the VM is running and every service would pass validation.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.vm_running && self.services.iter().all(ServiceReadiness::is_ready)
    }
}

/// Status use-cases. Read-only: nothing is started or stopped.
#[async_trait]
pub trait StatusOperator: Send + Sync {
    /// Query the VM once and check every service directory.
    async fn status(&self, config_toml: &str) -> Result<StatusReport>;
}
