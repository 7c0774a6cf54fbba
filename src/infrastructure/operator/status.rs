//! Status operator implementation.

use async_trait::async_trait;

use crate::application::lifecycle::validate_service;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::status::{ServiceReadiness, StatusOperator, StatusReport};

use super::entry::Operator;

#[async_trait]
impl StatusOperator for Operator {
    async fn status(&self, config_toml: &str) -> Result<StatusReport> {
        let config = Config::parse_toml(config_toml)?;
        let vm = bootstrap::build_vm_controller(&config);

        let (vm_status, vm_running) = match vm.status().await {
            Ok(status) => (Ok(status.to_string()), status.is_running()),
            Err(err) => (Err(err.to_string()), false),
        };

        let set = config.service_set()?;
        let mut services = Vec::with_capacity(set.len());
        for service in &set {
            let problem = validate_service(service).await.err().map(|e| e.to_string());
            services.push(ServiceReadiness {
                name: service.name().to_string(),
                path: service.path().display().to_string(),
                compose_file: service.deployment_file().to_string(),
                problem,
            });
        }

        Ok(StatusReport {
            lima_instance: vm.instance().to_string(),
            vm_status,
            vm_running,
            services,
        })
    }
}
