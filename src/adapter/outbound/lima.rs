//! Lima (`limactl`) hypervisor adapter.

use async_trait::async_trait;

use super::process::run_captured;
use crate::error::ToolError;
use crate::port::outbound::hypervisor::Hypervisor;

/// Go template passed to `limactl list` so each line is `name<TAB>status`.
pub const LIST_FORMAT: &str = "{{.Name}}\t{{.Status}}";

/// Drives Lima through its `limactl` command line.
#[derive(Debug, Clone)]
pub struct LimaCtl {
    program: String,
}

impl LimaCtl {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for the instance listing.
    #[must_use]
    pub fn list_args() -> [&'static str; 3] {
        ["list", "--format", LIST_FORMAT]
    }
}

impl Default for LimaCtl {
    fn default() -> Self {
        Self::new("limactl")
    }
}

#[async_trait]
impl Hypervisor for LimaCtl {
    async fn list_instances(&self) -> Result<String, ToolError> {
        run_captured(&self.program, Self::list_args(), None).await
    }

    async fn start_instance(&self, instance: &str) -> Result<(), ToolError> {
        run_captured(&self.program, ["start", instance], None)
            .await
            .map(|_| ())
    }

    fn hypervisor_name(&self) -> &'static str {
        "lima"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_format_is_tab_separated() {
        assert_eq!(LimaCtl::list_args(), ["list", "--format", "{{.Name}}\t{{.Status}}"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_binary_surfaces_spawn_error() {
        let lima = LimaCtl::new("launchd-docker-no-such-limactl");
        let err = lima.list_instances().await.unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }
}
