//! Hypervisor (Lima) configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::vm::{HealthPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL};

/// Which VM instance to keep running and how to watch it.
#[derive(Debug, Clone, Deserialize)]
pub struct HypervisorConfig {
    /// Lima instance name. Required.
    #[serde(default)]
    pub lima_instance: String,

    /// Program used to control Lima.
    #[serde(default = "default_limactl")]
    pub limactl: String,

    /// Pause between health polls, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Health polls before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_limactl() -> String {
    "limactl".to_string()
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL.as_millis() as u64
}

const fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl HypervisorConfig {
    #[must_use]
    pub fn health_policy(&self) -> HealthPolicy {
        HealthPolicy {
            interval: Duration::from_millis(self.poll_interval_ms),
            max_attempts: self.max_attempts,
        }
    }
}

impl Default for HypervisorConfig {
    fn default() -> Self {
        Self {
            lima_instance: String::new(),
            limactl: default_limactl(),
            poll_interval_ms: default_poll_interval_ms(),
            max_attempts: default_max_attempts(),
        }
    }
}
