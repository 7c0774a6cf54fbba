//! Unified operator capability surface for inbound adapters.

use super::configuration::ConfigurationOperator;
use super::runtime::RuntimeOperator;
use super::status::StatusOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + RuntimeOperator + StatusOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + RuntimeOperator + StatusOperator {}
