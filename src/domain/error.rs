//! Domain validation errors for core domain types.
//!
//! These errors are returned by constructors that enforce invariants on the
//! service set.
//!
//! # Examples
//!
//! ```
//! use launchd_docker::domain::error::DomainError;
//! use launchd_docker::domain::service::{ServiceDescriptor, ServiceSet};
//!
//! let result = ServiceSet::try_new(vec![
//!     ServiceDescriptor::new("web", "/srv/web"),
//!     ServiceDescriptor::new("web", "/srv/other"),
//! ]);
//!
//! assert!(matches!(result, Err(DomainError::DuplicateService { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A service set must contain at least one service.
    #[error("service set cannot be empty")]
    EmptyServiceSet,

    /// Service names must be unique within a set.
    #[error("duplicate service name: {name}")]
    DuplicateService {
        /// The name that appeared more than once.
        name: String,
    },
}
