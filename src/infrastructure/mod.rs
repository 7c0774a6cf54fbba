//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! orchestration logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - Operator port implementations used by the CLI
//! - [`shutdown`] - SIGINT/SIGTERM handling

pub mod bootstrap;
pub mod config;
pub mod operator;
pub mod shutdown;
