//! DemoService: the coordinator between HTTP handlers and the side effects
//! the endpoints perform.
//!
//! The string-building endpoints call straight into `poc_api_core`; only
//! subprocess execution and environment capture live here.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use poc_api_core::{ping, EnvironmentSnapshot, PingCommand};

use crate::error::ApiError;

/// Executes the side-effecting parts of the demonstration endpoints.
#[derive(Debug, Clone)]
pub struct DemoService {
    ping_timeout: Option<Duration>,
}

impl DemoService {
    pub fn new(ping_timeout: Option<Duration>) -> Self {
        Self { ping_timeout }
    }

    /// Runs `ping` against `host` through the shell and returns its stdout.
    ///
    /// The exit status is ignored. Stderr is discarded. If the wait is cut
    /// short (timeout, read failure, or the request being dropped) every
    /// process the shell started is killed along with it.
    pub async fn ping(&self, host: &str) -> Result<String, ApiError> {
        let command = PingCommand::new(host);
        tracing::info!(command = command.line(), "running ping");

        let mut cmd = Command::new(command.shell());
        cmd.args(command.shell_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        #[cfg(unix)]
        cmd.process_group(0);

        let child = cmd.spawn().map_err(|e| {
            tracing::warn!(error = %e, "failed to spawn ping");
            ApiError::ExecutionFailed(format!("failed to start '{}': {}", command.line(), e))
        })?;
        let group = ProcessGroup::new(child.id());

        let output = match self.ping_timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(timeout = ?limit, "ping timed out");
                    return Err(ApiError::ExecutionFailed(format!(
                        "'{}' did not finish within {:?}",
                        command.line(),
                        limit
                    )));
                }
            },
            None => child.wait_with_output().await,
        }
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to read ping output");
            ApiError::ExecutionFailed(format!("failed to read output of '{}': {}", command.line(), e))
        })?;
        group.release();

        tracing::debug!(status = ?output.status, bytes = output.stdout.len(), "ping finished");
        Ok(ping::render_output(&output.stdout))
    }

    /// Captures the full process environment.
    pub fn environment(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot::capture()
    }
}

impl Default for DemoService {
    fn default() -> Self {
        Self::new(None)
    }
}

/// SIGKILLs a subprocess's whole process group when dropped, unless
/// released once the subprocess has finished normally.
///
/// `kill_on_drop` only reaches the shell itself; commands it forked would
/// otherwise be reparented and keep running.
struct ProcessGroup {
    pgid: Option<u32>,
}

impl ProcessGroup {
    fn new(pgid: Option<u32>) -> Self {
        Self { pgid }
    }

    fn release(mut self) {
        self.pgid = None;
    }
}

impl Drop for ProcessGroup {
    fn drop(&mut self) {
        let Some(pgid) = self.pgid.take() else {
            return;
        };

        #[cfg(unix)]
        {
            // SAFETY: killpg only sends a signal. The group was created by
            // `process_group(0)` for this child and has not been released.
            let rc = unsafe { libc::killpg(pgid as libc::pid_t, libc::SIGKILL) };
            if rc != 0 {
                let err = std::io::Error::last_os_error();
                tracing::debug!(pgid, error = %err, "process group already gone");
            } else {
                tracing::debug!(pgid, "killed ping process group");
            }
        }
        #[cfg(not(unix))]
        let _ = pgid;
    }
}
