//! Configuration operator implementation.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::configuration::{
    ConfigCheckReport, ConfigurationOperator, ServiceView,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn check_config(&self, config_toml: &str) -> Result<ConfigCheckReport> {
        let config = Config::parse_toml(config_toml)?;

        let services = config
            .service_set()?
            .iter()
            .map(|service| ServiceView {
                name: service.name().to_string(),
                path: service.path().display().to_string(),
                compose_file: service.deployment_file().to_string(),
                compose_file_overridden: service.compose_file().is_some(),
            })
            .collect();

        Ok(ConfigCheckReport {
            lima_instance: config.hypervisor.lima_instance,
            limactl: config.hypervisor.limactl,
            docker: config.compose.docker,
            poll_interval_ms: config.hypervisor.poll_interval_ms,
            max_attempts: config.hypervisor.max_attempts,
            log_level: config.logging.level,
            log_format: config.logging.format,
            services,
        })
    }
}
