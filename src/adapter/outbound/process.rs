//! Captured execution of external command-line tools.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::ToolError;

/// Run `program args..` to completion and return its combined output.
///
/// stdout is followed by stderr in the returned text. When `workdir` is set
/// the child runs there; the daemon's own working directory is never changed.
/// A non-zero exit becomes [`ToolError::Failed`] carrying the output verbatim.
pub(crate) async fn run_captured<I, S>(
    program: &str,
    args: I,
    workdir: Option<&Path>,
) -> Result<String, ToolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = workdir {
        command.current_dir(dir);
    }

    debug!(program, command = ?command.as_std(), "Running external command");

    let output = command.output().await.map_err(|source| ToolError::Spawn {
        program: program.to_string(),
        source,
    })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        Ok(combined)
    } else {
        Err(ToolError::Failed {
            program: program.to_string(),
            status: output.status.code(),
            output: combined,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_stdout_and_stderr() {
        let output = run_captured("sh", ["-c", "echo out; echo err >&2"], None)
            .await
            .unwrap();
        assert_eq!(output, "out\nerr\n");
    }

    #[tokio::test]
    async fn non_zero_exit_keeps_output() {
        let err = run_captured("sh", ["-c", "echo broken >&2; exit 3"], None)
            .await
            .unwrap_err();
        match err {
            ToolError::Failed {
                program,
                status,
                output,
            } => {
                assert_eq!(program, "sh");
                assert_eq!(status, Some(3));
                assert_eq!(output, "broken\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let err = run_captured("launchd-docker-no-such-tool", ["x"], None)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }

    #[tokio::test]
    async fn runs_in_requested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let before = std::env::current_dir().unwrap();

        let output = run_captured("pwd", std::iter::empty::<&str>(), Some(dir.path()))
            .await
            .unwrap();

        let reported = std::fs::canonicalize(output.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(dir.path()).unwrap());
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
