//! Composition root: wire configured adapters into the orchestration driver.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::docker::DockerCompose;
use crate::adapter::outbound::lima::LimaCtl;
use crate::application::driver::OrchestrationDriver;
use crate::application::lifecycle::ServiceLifecycleController;
use crate::application::vm::VmReadinessController;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::compose::ComposeRunner;
use crate::port::outbound::hypervisor::Hypervisor;

/// Build the VM readiness controller for the configured instance.
#[must_use]
pub fn build_vm_controller(config: &Config) -> VmReadinessController {
    let hypervisor: Arc<dyn Hypervisor> = Arc::new(LimaCtl::new(&config.hypervisor.limactl));
    VmReadinessController::new(hypervisor, &config.hypervisor.lima_instance)
        .with_policy(config.hypervisor.health_policy())
}

/// Build the service lifecycle controller over the configured services.
///
/// # Errors
///
/// Returns an error if the configured services do not form a valid set.
pub fn build_lifecycle_controller(config: &Config) -> Result<ServiceLifecycleController> {
    let compose: Arc<dyn ComposeRunner> = Arc::new(DockerCompose::new(&config.compose.docker));
    Ok(ServiceLifecycleController::new(config.service_set()?, compose))
}

/// Build the full driver from configuration.
///
/// # Errors
///
/// Returns an error if the configured services do not form a valid set.
pub fn build_driver(config: &Config) -> Result<OrchestrationDriver> {
    let vm = build_vm_controller(config);
    let lifecycle = build_lifecycle_controller(config)?;

    info!(
        instance = vm.instance(),
        limactl = %config.hypervisor.limactl,
        docker = %config.compose.docker,
        services = ?lifecycle.services().names(),
        "Orchestrator configured"
    );

    Ok(OrchestrationDriver::new(vm, lifecycle))
}
