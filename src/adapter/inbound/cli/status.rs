//! Handler for the `status` command.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::status::StatusReport;

/// Query the VM once and check every service's files.
pub async fn execute(config_path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    let report = operator::operator().status(&config_toml).await?;

    if output::is_json() {
        output::json_output(&report_to_json(&report));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    match &report.vm_status {
        Ok(status) if report.vm_running => {
            output::success(&format!("VM {} is {status}", report.lima_instance));
        }
        Ok(status) => output::warning(&format!("VM {} is {status}", report.lima_instance)),
        Err(error) => output::warning(&format!(
            "Could not query VM {}: {error}",
            report.lima_instance
        )),
    }

    output::section("Services");
    for service in &report.services {
        match &service.problem {
            None => output::success(&format!("{} ({})", service.name, service.path)),
            Some(problem) => output::warning(&format!("{}: {problem}", service.name)),
        }
    }

    if !report.is_ready() {
        output::note("`run` will start the VM if needed but aborts on missing service files");
    }
    Ok(())
}

fn report_to_json(report: &StatusReport) -> serde_json::Value {
    let services: Vec<_> = report
        .services
        .iter()
        .map(|service| {
            json!({
                "name": service.name,
                "path": service.path,
                "compose_file": service.compose_file,
                "ready": service.is_ready(),
                "problem": service.problem,
            })
        })
        .collect();

    let (status, error) = match &report.vm_status {
        Ok(status) => (Some(status.as_str()), None),
        Err(error) => (None, Some(error.as_str())),
    };

    json!({
        "command": "status",
        "vm": {
            "instance": report.lima_instance,
            "status": status,
            "running": report.vm_running,
            "error": error,
        },
        "services": services,
        "ready": report.is_ready(),
    })
}
