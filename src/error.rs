use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failure of an external command-line tool.
///
/// `output` is the combined stdout/stderr of the process, kept verbatim so the
/// operator sees exactly what the tool printed.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}: {output}", describe_exit(.status))]
    Failed {
        program: String,
        status: Option<i32>,
        output: String,
    },
}

fn describe_exit(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "signal".to_string(),
    }
}

/// VM readiness errors. All of them are fatal to orchestration.
#[derive(Error, Debug)]
pub enum VmError {
    #[error("failed to start VM {instance}: {source}")]
    Start {
        instance: String,
        #[source]
        source: ToolError,
    },

    #[error("failed to query status of VM {instance}: {source}")]
    StatusQuery {
        instance: String,
        #[source]
        source: ToolError,
    },

    #[error("VM {instance} not running after {attempts} status checks")]
    HealthTimeout { instance: String, attempts: u32 },

    #[error("wait for VM {instance} cancelled by shutdown request")]
    Cancelled { instance: String },
}

/// Why a service failed its pre-start validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("service directory does not exist: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("compose file {file} not found in {}", .dir.display())]
    MissingDeploymentFile { file: String, dir: PathBuf },
}

/// Service lifecycle errors.
///
/// `Validation` aborts a whole start batch; `Start` and `Stop` are isolated to
/// one service and end up in the lifecycle report.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("service {service} validation failed: {reason}")]
    Validation {
        service: String,
        #[source]
        reason: ValidationFailure,
    },

    #[error("failed to start service {service}: {source}")]
    Start {
        service: String,
        #[source]
        source: ToolError,
    },

    #[error("failed to stop service {service}: {source}")]
    Stop {
        service: String,
        #[source]
        source: ToolError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Vm(#[from] VmError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
