//! Service descriptors and the ordered service set.
//!
//! A [`ServiceSet`] is built once from configuration and is read-only
//! afterwards. Its order is the start order; stop order is the reverse.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::error::DomainError;

/// Deployment definition looked up when a service has no override.
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yaml";

/// One compose project managed by the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    name: String,
    path: PathBuf,
    compose_file: Option<String>,
}

impl ServiceDescriptor {
    /// Create a descriptor that uses the default compose file.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            compose_file: None,
        }
    }

    /// Use `file` instead of [`DEFAULT_COMPOSE_FILE`].
    ///
    /// An empty string is treated as no override.
    #[must_use]
    pub fn with_compose_file(mut self, file: impl Into<String>) -> Self {
        let file = file.into();
        self.compose_file = (!file.is_empty()).then_some(file);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory holding the compose project; also the working directory for
    /// every compose invocation.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The explicit override, if one was configured.
    #[must_use]
    pub fn compose_file(&self) -> Option<&str> {
        self.compose_file.as_deref()
    }

    /// File name of the deployment definition, override or default.
    #[must_use]
    pub fn deployment_file(&self) -> &str {
        self.compose_file().unwrap_or(DEFAULT_COMPOSE_FILE)
    }

    /// Full path of the deployment definition.
    #[must_use]
    pub fn deployment_path(&self) -> PathBuf {
        self.path.join(self.deployment_file())
    }
}

/// Ordered, non-empty collection of services with unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSet {
    services: Vec<ServiceDescriptor>,
}

impl ServiceSet {
    /// Build a set, keeping the caller's order.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyServiceSet`] for an empty list and
    /// [`DomainError::DuplicateService`] when two descriptors share a name.
    pub fn try_new(services: Vec<ServiceDescriptor>) -> Result<Self, DomainError> {
        if services.is_empty() {
            return Err(DomainError::EmptyServiceSet);
        }

        let mut seen = HashSet::with_capacity(services.len());
        for service in &services {
            if !seen.insert(service.name()) {
                return Err(DomainError::DuplicateService {
                    name: service.name().to_string(),
                });
            }
        }

        Ok(Self { services })
    }

    /// Services in start order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ServiceDescriptor> {
        self.services.iter()
    }

    /// Services in stop order.
    pub fn iter_stop_order(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.iter().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Always false for a constructed set; provided for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Look up a service by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.iter().find(|s| s.name() == name)
    }

    /// Service names in start order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.services.iter().map(ServiceDescriptor::name).collect()
    }
}

impl<'a> IntoIterator for &'a ServiceSet {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.services.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> ServiceSet {
        ServiceSet::try_new(vec![
            ServiceDescriptor::new("a", "/srv/a"),
            ServiceDescriptor::new("b", "/srv/b"),
            ServiceDescriptor::new("c", "/srv/c"),
        ])
        .unwrap()
    }

    #[test]
    fn deployment_file_defaults_when_no_override() {
        let svc = ServiceDescriptor::new("web", "/srv/web");
        assert_eq!(svc.compose_file(), None);
        assert_eq!(svc.deployment_file(), DEFAULT_COMPOSE_FILE);
        assert_eq!(
            svc.deployment_path(),
            PathBuf::from("/srv/web/docker-compose.yaml")
        );
    }

    #[test]
    fn deployment_file_uses_override() {
        let svc = ServiceDescriptor::new("web", "/srv/web").with_compose_file("compose.prod.yml");
        assert_eq!(svc.compose_file(), Some("compose.prod.yml"));
        assert_eq!(
            svc.deployment_path(),
            PathBuf::from("/srv/web/compose.prod.yml")
        );
    }

    #[test]
    fn empty_override_is_ignored() {
        let svc = ServiceDescriptor::new("web", "/srv/web").with_compose_file("");
        assert_eq!(svc.compose_file(), None);
    }

    #[test]
    fn set_keeps_declared_order() {
        let set = three();
        assert_eq!(set.names(), vec!["a", "b", "c"]);
        let stop: Vec<_> = set.iter_stop_order().map(ServiceDescriptor::name).collect();
        assert_eq!(stop, vec!["c", "b", "a"]);
    }

    #[test]
    fn set_rejects_duplicates() {
        let err = ServiceSet::try_new(vec![
            ServiceDescriptor::new("a", "/srv/a"),
            ServiceDescriptor::new("b", "/srv/b"),
            ServiceDescriptor::new("a", "/srv/a2"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateService {
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn set_rejects_empty() {
        assert_eq!(
            ServiceSet::try_new(Vec::new()).unwrap_err(),
            DomainError::EmptyServiceSet
        );
    }

    #[test]
    fn get_finds_by_exact_name() {
        let set = three();
        assert_eq!(set.get("b").map(ServiceDescriptor::path), Some(Path::new("/srv/b")));
        assert!(set.get("B").is_none());
    }
}
