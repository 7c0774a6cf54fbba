//! Ordered start and stop of the service set.
//!
//! Starting runs in two phases. Validation is fail-fast: if any service's
//! directory or compose file is missing, nothing is started. Bringing services
//! up is fault-isolated: a failing service is recorded and the batch moves on.
//! Stopping has no validation phase and walks the set in reverse order with the
//! same isolation.
//!
//! A session lock serialises `start_all` and `stop_all`; overlapping calls wait
//! their turn rather than being merged.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::lifecycle::{LifecyclePhase, LifecycleReport, ServiceAction, ServiceOutcome};
use crate::domain::service::{ServiceDescriptor, ServiceSet};
use crate::error::{ServiceError, ValidationFailure};
use crate::port::outbound::compose::ComposeRunner;

/// Check that a service's directory and compose file exist.
///
/// # Errors
///
/// Returns the first missing piece as a [`ValidationFailure`].
pub async fn validate_service(service: &ServiceDescriptor) -> Result<(), ValidationFailure> {
    let dir_ok = tokio::fs::metadata(service.path())
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if !dir_ok {
        return Err(ValidationFailure::MissingDirectory {
            path: service.path().to_path_buf(),
        });
    }

    if tokio::fs::metadata(service.deployment_path()).await.is_err() {
        return Err(ValidationFailure::MissingDeploymentFile {
            file: service.deployment_file().to_string(),
            dir: service.path().to_path_buf(),
        });
    }

    Ok(())
}

/// Starts and stops a [`ServiceSet`] through a [`ComposeRunner`].
pub struct ServiceLifecycleController {
    services: ServiceSet,
    compose: Arc<dyn ComposeRunner>,
    session: Mutex<LifecyclePhase>,
}

impl ServiceLifecycleController {
    pub fn new(services: ServiceSet, compose: Arc<dyn ComposeRunner>) -> Self {
        Self {
            services,
            compose,
            session: Mutex::new(LifecyclePhase::Idle),
        }
    }

    #[must_use]
    pub fn services(&self) -> &ServiceSet {
        &self.services
    }

    /// Current phase. Waits for any in-flight start or stop to finish.
    pub async fn phase(&self) -> LifecyclePhase {
        *self.session.lock().await
    }

    /// Validate every service, then bring each one up in declared order.
    ///
    /// Individual `up` failures do not stop the batch and do not fail the
    /// call; they are logged and recorded in the returned report.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] naming the first invalid service.
    /// In that case no service is started.
    pub async fn start_all(&self) -> Result<LifecycleReport, ServiceError> {
        let mut phase = self.session.lock().await;
        *phase = LifecyclePhase::Starting;

        debug!(services = self.services.len(), "Validating service configurations");
        for service in &self.services {
            if let Err(reason) = validate_service(service).await {
                *phase = LifecyclePhase::Idle;
                error!(service = service.name(), %reason, "Service validation failed");
                return Err(ServiceError::Validation {
                    service: service.name().to_string(),
                    reason,
                });
            }
            debug!(service = service.name(), "Service validated");
        }

        info!(services = self.services.len(), "Starting services");
        let mut report = LifecycleReport::new();
        for service in &self.services {
            report.record(self.start_service(service).await);
        }

        *phase = LifecyclePhase::Running;
        info!(
            started = report.succeeded_count(),
            failed = report.failures().count(),
            "Service start complete"
        );
        Ok(report)
    }

    /// Bring every service down in reverse declared order.
    ///
    /// Every service is attempted regardless of earlier failures or of what
    /// is believed to be running.
    pub async fn stop_all(&self) -> LifecycleReport {
        let mut phase = self.session.lock().await;
        *phase = LifecyclePhase::Stopping;

        info!(services = self.services.len(), "Stopping services");
        let mut report = LifecycleReport::new();
        for service in self.services.iter_stop_order() {
            report.record(self.stop_service(service).await);
        }

        *phase = LifecyclePhase::Idle;
        info!(
            stopped = report.succeeded_count(),
            failed = report.failures().count(),
            "Service stop complete"
        );
        report
    }

    async fn start_service(&self, service: &ServiceDescriptor) -> ServiceOutcome {
        debug!(service = service.name(), path = %service.path().display(), "Starting service");
        match self.compose.up(service.path(), service.compose_file()).await {
            Ok(()) => {
                info!(service = service.name(), "Service started");
                ServiceOutcome::succeeded(service.name(), ServiceAction::Up)
            }
            Err(source) => {
                let err = ServiceError::Start {
                    service: service.name().to_string(),
                    source,
                };
                warn!(service = service.name(), error = %err, "Service failed to start");
                ServiceOutcome::failed(service.name(), ServiceAction::Up, err.to_string())
            }
        }
    }

    async fn stop_service(&self, service: &ServiceDescriptor) -> ServiceOutcome {
        debug!(service = service.name(), path = %service.path().display(), "Stopping service");
        match self.compose.down(service.path(), service.compose_file()).await {
            Ok(()) => {
                info!(service = service.name(), "Service stopped");
                ServiceOutcome::succeeded(service.name(), ServiceAction::Down)
            }
            Err(source) => {
                let err = ServiceError::Stop {
                    service: service.name().to_string(),
                    source,
                };
                warn!(service = service.name(), error = %err, "Service failed to stop");
                ServiceOutcome::failed(service.name(), ServiceAction::Down, err.to_string())
            }
        }
    }
}
