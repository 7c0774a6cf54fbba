//! Temporary compose project directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::service::{ServiceDescriptor, DEFAULT_COMPOSE_FILE};

const COMPOSE_STUB: &str = "services:\n  app:\n    image: busybox\n";

/// A temporary root holding one directory per service.
///
/// Everything is removed when the fixture is dropped.
#[derive(Debug)]
pub struct ServiceFixture {
    root: TempDir,
}

impl ServiceFixture {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            root: tempfile::tempdir()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Absolute directory a service called `name` would live in.
    pub fn dir(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// A valid service using the default compose file.
    pub fn service(&self, name: &str) -> io::Result<ServiceDescriptor> {
        let dir = self.dir(name);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(DEFAULT_COMPOSE_FILE), COMPOSE_STUB)?;
        Ok(ServiceDescriptor::new(name, dir))
    }

    /// A valid service with a compose file override.
    pub fn service_with_file(&self, name: &str, file: &str) -> io::Result<ServiceDescriptor> {
        let dir = self.dir(name);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(file), COMPOSE_STUB)?;
        Ok(ServiceDescriptor::new(name, dir).with_compose_file(file))
    }

    /// A service whose directory exists but has no compose file.
    pub fn service_without_file(&self, name: &str) -> io::Result<ServiceDescriptor> {
        let dir = self.dir(name);
        fs::create_dir_all(&dir)?;
        Ok(ServiceDescriptor::new(name, dir))
    }

    /// A service whose directory does not exist.
    pub fn missing_service(&self, name: &str) -> ServiceDescriptor {
        ServiceDescriptor::new(name, self.dir(name))
    }
}
