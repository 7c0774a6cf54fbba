//! VM readiness: make sure the hypervisor instance is up before services run.
//!
//! Starting and health-waiting are separate steps. `ensure_running` is a
//! one-shot side effect that does nothing when the instance is already
//! running; `wait_for_healthy` polls the instance listing until it reports
//! `Running` or the attempt budget is spent.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::vm::{parse_status_listing, VmStatus};
use crate::error::VmError;
use crate::port::outbound::hypervisor::Hypervisor;

/// Default pause between status polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default number of status polls before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// How long and how often to poll for health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// What `ensure_running` had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDisposition {
    /// The instance was already running; nothing was started.
    AlreadyRunning,
    /// A start request was issued and accepted.
    Started,
}

/// Brings one named VM instance to the running state.
pub struct VmReadinessController {
    hypervisor: Arc<dyn Hypervisor>,
    instance: String,
    policy: HealthPolicy,
}

impl VmReadinessController {
    pub fn new(hypervisor: Arc<dyn Hypervisor>, instance: impl Into<String>) -> Self {
        Self {
            hypervisor,
            instance: instance.into(),
            policy: HealthPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: HealthPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    #[must_use]
    pub const fn policy(&self) -> HealthPolicy {
        self.policy
    }

    /// Query the instance status once.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::StatusQuery`] if the listing command fails.
    pub async fn status(&self) -> Result<VmStatus, VmError> {
        let listing = self
            .hypervisor
            .list_instances()
            .await
            .map_err(|source| VmError::StatusQuery {
                instance: self.instance.clone(),
                source,
            })?;
        Ok(parse_status_listing(&listing, &self.instance))
    }

    /// Start the instance unless it is already running.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::StatusQuery`] if the status cannot be read and
    /// [`VmError::Start`] if the start request fails.
    pub async fn ensure_running(&self) -> Result<StartDisposition, VmError> {
        let status = self.status().await?;
        if status.is_running() {
            debug!(instance = %self.instance, "VM already running");
            return Ok(StartDisposition::AlreadyRunning);
        }

        info!(
            instance = %self.instance,
            hypervisor = self.hypervisor.hypervisor_name(),
            %status,
            "Starting VM"
        );
        self.hypervisor
            .start_instance(&self.instance)
            .await
            .map_err(|source| VmError::Start {
                instance: self.instance.clone(),
                source,
            })?;

        Ok(StartDisposition::Started)
    }

    /// Poll until the instance reports `Running`.
    ///
    /// Returns the 1-based attempt on which the instance was first seen
    /// running. A shutdown request on `shutdown` aborts the wait between
    /// polls. There is no pause after the final attempt.
    ///
    /// # Errors
    ///
    /// - [`VmError::StatusQuery`] as soon as any listing query fails; query
    ///   failures are not retried.
    /// - [`VmError::HealthTimeout`] when every attempt saw another status.
    /// - [`VmError::Cancelled`] when shutdown was requested mid-wait.
    pub async fn wait_for_healthy(
        &self,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<u32, VmError> {
        let HealthPolicy {
            interval,
            max_attempts,
        } = self.policy;

        for attempt in 1..=max_attempts {
            let status = self.status().await?;
            if status.is_running() {
                info!(instance = %self.instance, attempt, "VM is healthy");
                return Ok(attempt);
            }

            debug!(instance = %self.instance, attempt, max_attempts, %status, "VM not ready");

            if attempt < max_attempts {
                self.pause(interval, shutdown).await?;
            }
        }

        warn!(instance = %self.instance, max_attempts, "Gave up waiting for VM");
        Err(VmError::HealthTimeout {
            instance: self.instance.clone(),
            attempts: max_attempts,
        })
    }

    async fn pause(
        &self,
        interval: Duration,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Result<(), VmError> {
        if *shutdown.borrow() {
            return Err(self.cancelled());
        }

        tokio::select! {
            () = tokio::time::sleep(interval) => Ok(()),
            changed = shutdown.changed() => {
                // A dropped sender can never signal shutdown; keep sleeping.
                if changed.is_err() {
                    tokio::time::sleep(interval).await;
                    return Ok(());
                }
                if *shutdown.borrow() {
                    Err(self.cancelled())
                } else {
                    Ok(())
                }
            }
        }
    }

    fn cancelled(&self) -> VmError {
        info!(instance = %self.instance, "VM wait cancelled by shutdown");
        VmError::Cancelled {
            instance: self.instance.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::hypervisor::{listing, ScriptedHypervisor};

    const VM: &str = "docker";

    fn fast() -> HealthPolicy {
        HealthPolicy {
            interval: Duration::ZERO,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    fn controller(hv: &Arc<ScriptedHypervisor>) -> VmReadinessController {
        VmReadinessController::new(Arc::clone(hv) as Arc<dyn Hypervisor>, VM).with_policy(fast())
    }

    #[test]
    fn default_policy_matches_documented_bound() {
        let policy = HealthPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(2));
        assert_eq!(policy.max_attempts, 30);
    }

    #[tokio::test]
    async fn ensure_running_is_noop_when_running() {
        let hv = Arc::new(ScriptedHypervisor::new().then_listing(listing(VM, "Running")));
        let result = controller(&hv).ensure_running().await.unwrap();

        assert_eq!(result, StartDisposition::AlreadyRunning);
        assert!(hv.start_calls().is_empty());
    }

    #[tokio::test]
    async fn ensure_running_starts_stopped_vm_once() {
        let hv = Arc::new(ScriptedHypervisor::new().then_listing(listing(VM, "Stopped")));
        let result = controller(&hv).ensure_running().await.unwrap();

        assert_eq!(result, StartDisposition::Started);
        assert_eq!(hv.start_calls(), vec![VM.to_string()]);
    }

    #[tokio::test]
    async fn ensure_running_starts_unknown_vm() {
        let hv = Arc::new(ScriptedHypervisor::new().then_listing(listing("other", "Running")));
        controller(&hv).ensure_running().await.unwrap();
        assert_eq!(hv.start_calls().len(), 1);
    }

    #[tokio::test]
    async fn ensure_running_surfaces_start_output() {
        let hv = Arc::new(
            ScriptedHypervisor::new()
                .then_listing(listing(VM, "Stopped"))
                .with_start_failure("FATA[0000] instance \"docker\" is broken"),
        );
        let err = controller(&hv).ensure_running().await.unwrap_err();

        assert!(matches!(err, VmError::Start { .. }));
        assert!(err.to_string().contains("is broken"));
    }

    #[tokio::test]
    async fn ensure_running_fails_on_status_query_error() {
        let hv = Arc::new(ScriptedHypervisor::new().then_query_failure("limactl: not found"));
        let err = controller(&hv).ensure_running().await.unwrap_err();

        assert!(matches!(err, VmError::StatusQuery { .. }));
        assert!(hv.start_calls().is_empty());
    }

    #[tokio::test]
    async fn wait_returns_on_first_running_poll() {
        let hv = Arc::new(
            ScriptedHypervisor::new()
                .then_listings(&listing(VM, "Starting"), 4)
                .then_listing(listing(VM, "Running")),
        );
        let (_tx, mut rx) = watch::channel(false);

        let attempt = controller(&hv).wait_for_healthy(&mut rx).await.unwrap();

        assert_eq!(attempt, 5);
        assert_eq!(hv.list_calls(), 5);
    }

    #[tokio::test]
    async fn wait_times_out_after_max_attempts() {
        let hv = Arc::new(ScriptedHypervisor::new().then_listing(listing(VM, "Stopped")));
        let (_tx, mut rx) = watch::channel(false);

        let err = controller(&hv).wait_for_healthy(&mut rx).await.unwrap_err();

        assert!(matches!(
            err,
            VmError::HealthTimeout { attempts: 30, .. }
        ));
        assert_eq!(hv.list_calls(), 30);
    }

    #[tokio::test]
    async fn wait_does_not_retry_query_failures() {
        let hv = Arc::new(
            ScriptedHypervisor::new()
                .then_listing(listing(VM, "Starting"))
                .then_query_failure("connection refused"),
        );
        let (_tx, mut rx) = watch::channel(false);

        let err = controller(&hv).wait_for_healthy(&mut rx).await.unwrap_err();

        assert!(matches!(err, VmError::StatusQuery { .. }));
        assert_eq!(hv.list_calls(), 2);
    }

    #[tokio::test]
    async fn wait_ignores_other_instances() {
        let hv = Arc::new(
            ScriptedHypervisor::new()
                .then_listing(format!("{}{}", listing("docker-2", "Running"), listing(VM, "Stopped")))
                .then_listing(listing(VM, "Running")),
        );
        let (_tx, mut rx) = watch::channel(false);

        assert_eq!(controller(&hv).wait_for_healthy(&mut rx).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn wait_is_cancelled_by_shutdown() {
        let hv = Arc::new(ScriptedHypervisor::new().then_listing(listing(VM, "Stopped")));
        let controller = VmReadinessController::new(Arc::clone(&hv) as Arc<dyn Hypervisor>, VM)
            .with_policy(HealthPolicy {
                interval: Duration::from_secs(3600),
                max_attempts: 30,
            });
        let (tx, mut rx) = watch::channel(false);

        let cancel = tokio::spawn(async move {
            tokio::task::yield_now().await;
            let _ = tx.send(true);
            tx
        });

        let err = controller.wait_for_healthy(&mut rx).await.unwrap_err();
        let _tx = cancel.await.unwrap();

        assert!(matches!(err, VmError::Cancelled { .. }));
        assert_eq!(hv.list_calls(), 1);
    }

    #[tokio::test]
    async fn wait_is_cancelled_when_shutdown_already_requested() {
        let hv = Arc::new(ScriptedHypervisor::new().then_listing(listing(VM, "Stopped")));
        let (tx, mut rx) = watch::channel(false);
        tx.send(true).unwrap();

        let err = controller(&hv).wait_for_healthy(&mut rx).await.unwrap_err();
        assert!(matches!(err, VmError::Cancelled { .. }));
    }
}
