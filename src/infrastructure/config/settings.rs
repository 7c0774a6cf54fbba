//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file.
//!
//! # Example
//!
//! ```no_run
//! use launchd_docker::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("launchd-docker.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use super::hypervisor::HypervisorConfig;
use super::logging::LoggingConfig;
use super::service::{ComposeConfig, ServiceConfig};
use crate::domain::service::ServiceSet;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. A loaded config always has a non-empty instance
/// name and at least one service with a unique name and an absolute path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// VM instance to keep running.
    #[serde(default)]
    pub hypervisor: HypervisorConfig,

    /// Compose tool settings.
    #[serde(default)]
    pub compose: ComposeConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Services in start order.
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// Service directories are not checked here; that happens right before
    /// services are started.
    fn validate(&self) -> Result<()> {
        if self.hypervisor.lima_instance.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "hypervisor.lima_instance",
            }
            .into());
        }
        if self.hypervisor.limactl.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "hypervisor.limactl",
            }
            .into());
        }
        if self.hypervisor.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "hypervisor.max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.compose.docker.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "compose.docker",
            }
            .into());
        }
        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }

        if self.services.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "services",
                reason: "at least one service is required".to_string(),
            }
            .into());
        }

        let mut names = HashSet::with_capacity(self.services.len());
        for service in &self.services {
            if service.name.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "services.name",
                }
                .into());
            }
            if service.path.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "services.path",
                }
                .into());
            }
            if !Path::new(&service.path).is_absolute() {
                return Err(ConfigError::InvalidValue {
                    field: "services.path",
                    reason: format!("service path must be absolute: {}", service.path),
                }
                .into());
            }
            if !names.insert(service.name.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "services.name",
                    reason: format!("duplicate service name: {}", service.name),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Build the ordered service set.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the services violate set invariants, which
    /// a validated config never does.
    pub fn service_set(&self) -> Result<ServiceSet> {
        let descriptors = self
            .services
            .iter()
            .map(ServiceConfig::to_descriptor)
            .collect();
        Ok(ServiceSet::try_new(descriptors)?)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
