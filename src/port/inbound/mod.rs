//! Inbound (driving) ports consumed by inbound adapters.
//!
//! Inbound ports expose application capabilities to external drivers such as
//! the command-line interface.
//!
//! # Modules
//!
//! - [`operator`] - Operator-facing use-cases (run, check, status)

pub mod operator;
