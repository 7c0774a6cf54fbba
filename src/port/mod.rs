//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between orchestration logic and the outside world.
//! Outbound ports describe the external command line tools the orchestrator
//! drives; adapters in [`crate::adapter`] implement them and the `testkit`
//! module provides scripted fakes. Inbound ports describe the operator
//! use-cases the CLI calls.
//!
//! ```text
//!                      ┌──────────────┐
//!                      │     CLI      │
//!                      └──────┬───────┘
//!                             │ inbound::operator
//!                 ┌───────────▼──────────────┐
//!                 │       Application        │
//!                 │  VM readiness, lifecycle │
//!                 └───────────┬──────────────┘
//!              ┌──────────────┴───────────────┐
//!              ▼ outbound::hypervisor         ▼ outbound::compose
//!       ┌────────────┐                 ┌──────────────┐
//!       │  limactl   │                 │    docker    │
//!       └────────────┘                 └──────────────┘
//! ```

pub mod inbound;
pub mod outbound;
