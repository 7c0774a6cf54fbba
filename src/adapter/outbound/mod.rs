//! Outbound adapters: the external tools behind the outbound ports.

pub mod docker;
pub mod lima;
pub mod process;
