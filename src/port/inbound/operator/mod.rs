//! Operator-facing inbound ports consumed by CLI adapters.

pub mod configuration;
pub mod port;
pub mod runtime;
pub mod status;
