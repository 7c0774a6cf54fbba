//! Lifecycle phases and per-service outcomes.

use std::fmt;

/// Where the service set is in its start/stop cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Nothing has been started, or everything has been stopped.
    #[default]
    Idle,
    /// A start batch is in progress.
    Starting,
    /// The last start batch finished (possibly with isolated failures).
    Running,
    /// A stop batch is in progress.
    Stopping,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
        };
        f.write_str(label)
    }
}

/// The compose action invoked for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    /// `compose up -d`
    Up,
    /// `compose down`
    Down,
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// Result of one compose invocation for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOutcome {
    service: String,
    action: ServiceAction,
    error: Option<String>,
}

impl ServiceOutcome {
    #[must_use]
    pub fn succeeded(service: impl Into<String>, action: ServiceAction) -> Self {
        Self {
            service: service.into(),
            action,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(service: impl Into<String>, action: ServiceAction, error: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            action,
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    #[must_use]
    pub const fn action(&self) -> ServiceAction {
        self.action
    }

    /// The rendered error, when the invocation failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcomes of a whole start or stop batch, in invocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleReport {
    outcomes: Vec<ServiceOutcome>,
}

impl LifecycleReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: ServiceOutcome) {
        self.outcomes.push(outcome);
    }

    #[must_use]
    pub fn outcomes(&self) -> &[ServiceOutcome] {
        &self.outcomes
    }

    /// Names of every service that was attempted, in order.
    #[must_use]
    pub fn attempted(&self) -> Vec<&str> {
        self.outcomes.iter().map(ServiceOutcome::service).collect()
    }

    /// Outcomes that carry an error.
    pub fn failures(&self) -> impl Iterator<Item = &ServiceOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// True when every attempted invocation succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(ServiceOutcome::is_success)
    }

    #[must_use]
    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }
}
