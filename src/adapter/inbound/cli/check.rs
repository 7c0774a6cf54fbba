//! Handler for `check config`.

use std::path::Path;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;

/// Validate a configuration file without touching the VM or any service.
pub fn execute_config(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    let report = operator::operator().check_config(&config_toml)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Instance", &report.lima_instance);
    output::field("limactl", &report.limactl);
    output::field("docker", &report.docker);
    if output::verbosity() > 0 {
        output::field("Poll", format!("{}ms", report.poll_interval_ms));
        output::field("Attempts", report.max_attempts);
    }
    output::field("Log level", &report.log_level);
    output::field("Log format", &report.log_format);

    output::section("Services");
    for service in &report.services {
        let file = if service.compose_file_overridden {
            format!("{} (override)", service.compose_file)
        } else {
            service.compose_file.clone()
        };
        output::field(&service.name, format!("{} [{file}]", service.path));
    }

    output::note("Service directories are checked by `status` and at startup");
    Ok(())
}
