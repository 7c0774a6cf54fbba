//! Container orchestration port: bring compose projects up and down.

use std::path::Path;

use async_trait::async_trait;

use crate::error::ToolError;

/// Runs compose actions for a project directory.
///
/// Every call names its working directory explicitly; implementations must
/// never change the process-wide current directory.
#[async_trait]
pub trait ComposeRunner: Send + Sync {
    /// `compose [-f file] up -d` inside `workdir`.
    async fn up(&self, workdir: &Path, compose_file: Option<&str>) -> Result<(), ToolError>;

    /// `compose [-f file] down` inside `workdir`.
    ///
    /// Tearing down a project that is not running must succeed.
    async fn down(&self, workdir: &Path, compose_file: Option<&str>) -> Result<(), ToolError>;
}
