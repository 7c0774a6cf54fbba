//! Orchestration driver: VM readiness, service start, wait, service stop.

use tokio::sync::watch;
use tracing::{error, info, warn};

use super::lifecycle::ServiceLifecycleController;
use super::vm::{StartDisposition, VmReadinessController};
use crate::domain::lifecycle::LifecycleReport;
use crate::error::{Result, VmError};

/// What happened during one run of the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Services were started (or start was attempted) and then stopped.
    Completed {
        vm: StartDisposition,
        health_attempts: u32,
        /// `None` when validation aborted the start batch.
        started: Option<LifecycleReport>,
        stopped: LifecycleReport,
    },
    /// Shutdown arrived while waiting for the VM; no service was touched.
    CancelledBeforeStart,
}

/// Ties the two controllers to the process lifetime.
pub struct OrchestrationDriver {
    vm: VmReadinessController,
    lifecycle: ServiceLifecycleController,
}

impl OrchestrationDriver {
    pub fn new(vm: VmReadinessController, lifecycle: ServiceLifecycleController) -> Self {
        Self { vm, lifecycle }
    }

    #[must_use]
    pub fn vm(&self) -> &VmReadinessController {
        &self.vm
    }

    #[must_use]
    pub fn lifecycle(&self) -> &ServiceLifecycleController {
        &self.lifecycle
    }

    /// Run until `shutdown` flips to `true`, then stop everything.
    ///
    /// VM errors are fatal and returned before any service is touched. A
    /// failed start batch is logged and the driver still waits for shutdown
    /// so whatever did start can be torn down.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Vm`] when the VM cannot be started or
    /// never becomes healthy.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<RunOutcome> {
        let instance = self.vm.instance();

        info!(instance, "Checking VM status");
        let vm = self.vm.ensure_running().await?;
        if vm == StartDisposition::Started {
            info!(instance, "VM start requested");
        }

        info!(instance, "Waiting for VM to be healthy");
        let health_attempts = match self.vm.wait_for_healthy(&mut shutdown).await {
            Ok(attempts) => attempts,
            Err(VmError::Cancelled { .. }) => {
                info!("Shutdown requested before services were started");
                return Ok(RunOutcome::CancelledBeforeStart);
            }
            Err(err) => return Err(err.into()),
        };

        let started = match self.lifecycle.start_all().await {
            Ok(report) => {
                for failure in report.failures() {
                    warn!(
                        service = failure.service(),
                        error = failure.error().unwrap_or_default(),
                        "Service did not start"
                    );
                }
                Some(report)
            }
            Err(err) => {
                error!(error = %err, "Error starting services");
                None
            }
        };

        info!("Waiting for shutdown signal");
        wait_for_shutdown(&mut shutdown).await;
        info!("Received shutdown signal, initiating graceful shutdown");

        let stopped = self.lifecycle.stop_all().await;
        for failure in stopped.failures() {
            warn!(
                service = failure.service(),
                error = failure.error().unwrap_or_default(),
                "Service did not stop cleanly"
            );
        }
        info!("Shutdown complete");

        Ok(RunOutcome::Completed {
            vm,
            health_attempts,
            started,
            stopped,
        })
    }
}

/// Resolve once `shutdown` reads `true`.
///
/// If every sender is gone no signal can ever arrive, so this never resolves.
async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) {
    if shutdown.wait_for(|requested| *requested).await.is_err() {
        std::future::pending::<()>().await;
    }
}
