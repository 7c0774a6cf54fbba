//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the external tools the orchestrator drives: the
//! VM hypervisor and the container orchestration tool.

pub mod compose;
pub mod hypervisor;
