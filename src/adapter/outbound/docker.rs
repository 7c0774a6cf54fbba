//! `docker compose` adapter.

use std::path::Path;

use async_trait::async_trait;

use super::process::run_captured;
use crate::domain::lifecycle::ServiceAction;
use crate::error::ToolError;
use crate::port::outbound::compose::ComposeRunner;

/// Runs `docker compose` inside each project's directory.
#[derive(Debug, Clone)]
pub struct DockerCompose {
    program: String,
}

impl DockerCompose {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the argument list for `action`, with `-f` only for an override.
    #[must_use]
    pub fn compose_args(action: ServiceAction, compose_file: Option<&str>) -> Vec<String> {
        let mut args = vec!["compose".to_string()];
        if let Some(file) = compose_file {
            args.push("-f".to_string());
            args.push(file.to_string());
        }
        match action {
            ServiceAction::Up => {
                args.push("up".to_string());
                args.push("-d".to_string());
            }
            ServiceAction::Down => args.push("down".to_string()),
        }
        args
    }

    async fn run(
        &self,
        action: ServiceAction,
        workdir: &Path,
        compose_file: Option<&str>,
    ) -> Result<(), ToolError> {
        let args = Self::compose_args(action, compose_file);
        run_captured(&self.program, &args, Some(workdir))
            .await
            .map(|_| ())
    }
}

impl Default for DockerCompose {
    fn default() -> Self {
        Self::new("docker")
    }
}

#[async_trait]
impl ComposeRunner for DockerCompose {
    async fn up(&self, workdir: &Path, compose_file: Option<&str>) -> Result<(), ToolError> {
        self.run(ServiceAction::Up, workdir, compose_file).await
    }

    async fn down(&self, workdir: &Path, compose_file: Option<&str>) -> Result<(), ToolError> {
        self.run(ServiceAction::Down, workdir, compose_file).await
    }
}
