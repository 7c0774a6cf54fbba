//! launchd-docker - keep a Lima VM and a set of docker compose projects up.
//!
//! The daemon makes sure a named Lima instance is running and reports itself
//! healthy, brings every configured compose project up in declared order,
//! then waits for SIGINT or SIGTERM and brings them down in reverse order.
//! It is meant to run in the foreground under a process supervisor such as
//! launchd.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Service descriptors, VM status parsing, lifecycle outcomes
//! - [`port`] - Traits for the hypervisor and compose tools, plus the
//!   operator use-cases the CLI calls
//! - [`application`] - VM readiness, ordered service lifecycle, the driver
//! - [`adapter`] - `limactl` and `docker compose` process adapters and the CLI
//! - [`infrastructure`] - Configuration, logging, signals, wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Scripted hypervisor, recording compose runner and
//!   service directory fixtures for tests
//!
//! # Example
//!
//! ```no_run
//! use launchd_docker::infrastructure::bootstrap::build_driver;
//! use launchd_docker::infrastructure::config::settings::Config;
//! use launchd_docker::infrastructure::shutdown::signal_listener;
//!
//! # async fn example() -> launchd_docker::error::Result<()> {
//! let config = Config::load("launchd-docker.toml")?;
//! config.init_logging();
//! let driver = build_driver(&config)?;
//! driver.run(signal_listener()).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
