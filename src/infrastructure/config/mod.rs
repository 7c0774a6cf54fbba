//! Infrastructure configuration modules.

pub mod hypervisor;
pub mod logging;
pub mod service;
pub mod settings;
