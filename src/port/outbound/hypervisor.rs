//! Hypervisor port: query and start VM instances.
//!
//! The hypervisor is an opaque external system. The core only asks it for a
//! listing of instances and to start one by name; parsing the listing is done
//! by [`crate::domain::vm::parse_status_listing`].

use async_trait::async_trait;

use crate::error::ToolError;

/// Control surface of a VM host such as Lima.
#[async_trait]
pub trait Hypervisor: Send + Sync {
    /// List every instance as `name<TAB>status` lines.
    async fn list_instances(&self) -> Result<String, ToolError>;

    /// Ask the hypervisor to start `instance`.
    ///
    /// On failure the error carries the tool's combined output.
    async fn start_instance(&self, instance: &str) -> Result<(), ToolError>;

    /// Name of the hypervisor, for logging.
    fn hypervisor_name(&self) -> &'static str;
}
