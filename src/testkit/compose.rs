//! Recording compose fake.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::lifecycle::ServiceAction;
use crate::error::ToolError;
use crate::port::outbound::compose::ComposeRunner;

/// One recorded compose invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCall {
    pub action: ServiceAction,
    pub workdir: PathBuf,
    pub compose_file: Option<String>,
}

/// Compose runner that records calls and fails for selected directories.
#[derive(Debug, Default)]
pub struct RecordingCompose {
    calls: Mutex<Vec<ComposeCall>>,
    failing_up: HashSet<PathBuf>,
    failing_down: HashSet<PathBuf>,
}

impl RecordingCompose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `up` fail for the project in `workdir`.
    #[must_use]
    pub fn failing_up(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.failing_up.insert(workdir.into());
        self
    }

    /// Make `down` fail for the project in `workdir`.
    #[must_use]
    pub fn failing_down(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.failing_down.insert(workdir.into());
        self
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<ComposeCall> {
        self.calls.lock().clone()
    }

    /// Working directories of calls for `action`, in order.
    pub fn workdirs(&self, action: ServiceAction) -> Vec<PathBuf> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.action == action)
            .map(|c| c.workdir.clone())
            .collect()
    }

    fn record(
        &self,
        action: ServiceAction,
        workdir: &Path,
        compose_file: Option<&str>,
        failing: &HashSet<PathBuf>,
    ) -> Result<(), ToolError> {
        self.calls.lock().push(ComposeCall {
            action,
            workdir: workdir.to_path_buf(),
            compose_file: compose_file.map(str::to_string),
        });

        if failing.contains(workdir) {
            return Err(ToolError::Failed {
                program: "docker".to_string(),
                status: Some(1),
                output: format!("compose {action} failed in {}", workdir.display()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ComposeRunner for RecordingCompose {
    async fn up(&self, workdir: &Path, compose_file: Option<&str>) -> Result<(), ToolError> {
        self.record(ServiceAction::Up, workdir, compose_file, &self.failing_up)
    }

    async fn down(&self, workdir: &Path, compose_file: Option<&str>) -> Result<(), ToolError> {
        self.record(ServiceAction::Down, workdir, compose_file, &self.failing_down)
    }
}
