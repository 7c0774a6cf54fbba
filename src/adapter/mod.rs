//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - The command-line interface that drives the application
//! - [`outbound`] - `limactl` and `docker compose` process adapters

pub mod inbound;
pub mod outbound;
