//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`hypervisor`] - `ScriptedHypervisor`, a fake
//!   [`Hypervisor`](crate::port::outbound::hypervisor::Hypervisor) that plays
//!   back a script of instance listings.
//! - [`compose`] - `RecordingCompose`, a fake
//!   [`ComposeRunner`](crate::port::outbound::compose::ComposeRunner) that
//!   records every invocation and fails on demand.
//! - [`fixture`] - Temporary service directories with compose files.

pub mod compose;
pub mod fixture;
pub mod hypervisor;
