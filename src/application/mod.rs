//! Application services (use cases).
//!
//! These services sequence domain logic over the outbound ports: VM
//! readiness, ordered service lifecycle, and the driver that binds both to
//! the process lifetime.

pub mod driver;
pub mod lifecycle;
pub mod vm;
