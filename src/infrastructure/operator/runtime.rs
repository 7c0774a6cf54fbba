//! Runtime operator implementation.

use async_trait::async_trait;
use tracing::info;

use crate::application::driver::RunOutcome;
use crate::domain::lifecycle::LifecycleReport;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::{bootstrap, shutdown};
use crate::port::inbound::operator::runtime::{
    RunRequest, RunStartupSnapshot, RunSummary, RuntimeOperator,
};

use super::entry::Operator;

#[async_trait]
impl RuntimeOperator for Operator {
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot> {
        let config = Self::load_run_config(request)?;
        Ok(RunStartupSnapshot {
            lima_instance: config.hypervisor.lima_instance.clone(),
            service_names: config.services.iter().map(|s| s.name.clone()).collect(),
        })
    }

    async fn execute_run(&self, request: RunRequest) -> Result<RunSummary> {
        let config = Self::load_run_config(&request)?;
        config.init_logging();

        info!(
            instance = %config.hypervisor.lima_instance,
            services = config.services.len(),
            "launchd-docker starting"
        );

        let driver = bootstrap::build_driver(&config)?;
        let outcome = driver.run(shutdown::signal_listener()).await?;

        info!("launchd-docker stopped");
        Ok(summarize(&outcome))
    }
}

impl Operator {
    fn load_run_config(request: &RunRequest) -> Result<Config> {
        let mut config = Config::parse_toml(&request.config_toml)?;
        Self::apply_run_overrides(&mut config, request);
        Ok(config)
    }

    fn apply_run_overrides(config: &mut Config, request: &RunRequest) {
        if let Some(ref log_level) = request.log_level {
            config.logging.level = log_level.clone();
        } else if request.verbose {
            config.logging.level = "debug".to_string();
        }

        if request.json_logs {
            config.logging.format = "json".to_string();
        }
    }
}

fn failed_names(report: &LifecycleReport) -> Vec<String> {
    report
        .failures()
        .map(|outcome| outcome.service().to_string())
        .collect()
}

fn summarize(outcome: &RunOutcome) -> RunSummary {
    match outcome {
        RunOutcome::CancelledBeforeStart => RunSummary {
            cancelled_before_start: true,
            ..RunSummary::default()
        },
        RunOutcome::Completed {
            started, stopped, ..
        } => RunSummary {
            cancelled_before_start: false,
            start_aborted: started.is_none(),
            started: started.as_ref().map_or(0, LifecycleReport::succeeded_count),
            start_failures: started.as_ref().map(failed_names).unwrap_or_default(),
            stopped: stopped.succeeded_count(),
            stop_failures: failed_names(stopped),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::vm::StartDisposition;
    use crate::domain::lifecycle::{ServiceAction, ServiceOutcome};

    const CONFIG: &str = r#"
[hypervisor]
lima_instance = "docker"

[logging]
level = "warn"

[[services]]
name = "a"
path = "/srv/a"

[[services]]
name = "b"
path = "/srv/b"
"#;

    fn request() -> RunRequest {
        RunRequest {
            config_toml: CONFIG.to_string(),
            ..RunRequest::default()
        }
    }

    #[test]
    fn prepare_run_lists_services_in_order() {
        let snapshot = Operator::new().prepare_run(&request()).unwrap();
        assert_eq!(snapshot.lima_instance, "docker");
        assert_eq!(snapshot.service_names, vec!["a", "b"]);
    }

    #[test]
    fn explicit_log_level_wins_over_verbose() {
        let req = RunRequest {
            log_level: Some("trace".to_string()),
            verbose: true,
            json_logs: true,
            ..request()
        };
        let config = Operator::load_run_config(&req).unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn verbose_raises_level_to_debug() {
        let req = RunRequest {
            verbose: true,
            ..request()
        };
        assert_eq!(Operator::load_run_config(&req).unwrap().logging.level, "debug");
        assert_eq!(
            Operator::load_run_config(&request()).unwrap().logging.level,
            "warn"
        );
    }

    #[test]
    fn summary_collects_failures() {
        let mut started = LifecycleReport::new();
        started.record(ServiceOutcome::succeeded("a", ServiceAction::Up));
        started.record(ServiceOutcome::failed("b", ServiceAction::Up, "boom"));
        let mut stopped = LifecycleReport::new();
        stopped.record(ServiceOutcome::succeeded("b", ServiceAction::Down));
        stopped.record(ServiceOutcome::succeeded("a", ServiceAction::Down));

        let summary = summarize(&RunOutcome::Completed {
            vm: StartDisposition::AlreadyRunning,
            health_attempts: 1,
            started: Some(started),
            stopped,
        });

        assert!(!summary.start_aborted);
        assert_eq!(summary.started, 1);
        assert_eq!(summary.start_failures, vec!["b"]);
        assert_eq!(summary.stopped, 2);
        assert!(summary.stop_failures.is_empty());
    }

    #[test]
    fn summary_marks_cancelled_and_aborted_runs() {
        assert!(summarize(&RunOutcome::CancelledBeforeStart).cancelled_before_start);

        let aborted = summarize(&RunOutcome::Completed {
            vm: StartDisposition::Started,
            health_attempts: 3,
            started: None,
            stopped: LifecycleReport::new(),
        });
        assert!(aborted.start_aborted);
        assert_eq!(aborted.started, 0);
    }
}
