//! Compose tool and service entries.

use serde::Deserialize;

use crate::domain::service::ServiceDescriptor;

/// Container orchestration tool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeConfig {
    /// Program whose `compose` subcommand runs the projects.
    #[serde(default = "default_docker")]
    pub docker: String,
}

fn default_docker() -> String {
    "docker".to_string()
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            docker: default_docker(),
        }
    }
}

/// One `[[services]]` entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// Compose file override; the default file is used when absent.
    #[serde(default)]
    pub compose_file: Option<String>,
}

impl ServiceConfig {
    #[must_use]
    pub fn to_descriptor(&self) -> ServiceDescriptor {
        let descriptor = ServiceDescriptor::new(&self.name, &self.path);
        match &self.compose_file {
            Some(file) => descriptor.with_compose_file(file),
            None => descriptor,
        }
    }
}
