//! Orchestration domain types. No I/O, no async runtime.

pub mod error;
pub mod lifecycle;
pub mod service;
pub mod vm;
