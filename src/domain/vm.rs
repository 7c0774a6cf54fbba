//! VM instance status as reported by the hypervisor's instance listing.

use std::fmt;

/// Status string the hypervisor reports for a healthy instance.
pub const RUNNING_STATUS: &str = "Running";

/// Status string the hypervisor reports for a stopped instance.
pub const STOPPED_STATUS: &str = "Stopped";

/// Externally observed state of a VM instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmStatus {
    /// The instance does not appear in the listing.
    Unknown,
    /// The instance exists but is stopped.
    Stopped,
    /// The instance is running and healthy.
    Running,
    /// Any other status string (e.g. `Broken`), kept verbatim.
    Other(String),
}

impl VmStatus {
    /// Map a raw status column to a status. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            RUNNING_STATUS => Self::Running,
            STOPPED_STATUS => Self::Stopped,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for VmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Stopped => f.write_str(STOPPED_STATUS),
            Self::Running => f.write_str(RUNNING_STATUS),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Find `instance` in a `name<TAB>status` listing.
///
/// Lines that do not have exactly two tab-separated columns are ignored, as
/// are lines for other instances. The first line whose name matches exactly
/// decides the result; an instance missing from the listing is
/// [`VmStatus::Unknown`].
#[must_use]
pub fn parse_status_listing(listing: &str, instance: &str) -> VmStatus {
    listing
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let name = fields.next()?;
            let status = fields.next()?;
            fields.next().is_none().then_some((name, status))
        })
        .find(|(name, _)| *name == instance)
        .map_or(VmStatus::Unknown, |(_, status)| VmStatus::from_raw(status))
}
