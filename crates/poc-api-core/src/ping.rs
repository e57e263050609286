//! Shell command construction for the ping endpoint.
//!
//! The host is spliced into the command line unquoted and the line is
//! handed to the platform shell, so shell metacharacters in the host are
//! interpreted. This is the command injection the endpoint demonstrates.

/// A single-probe ping command built from a raw host value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingCommand {
    line: String,
}

impl PingCommand {
    /// Builds `ping -c 1 {host}` (`ping -n 1 {host}` on Windows).
    pub fn new(host: &str) -> Self {
        Self {
            line: format!("{} {}", PING_PREFIX, host),
        }
    }

    /// The full command line passed to the shell.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The shell program that interprets [`line`](Self::line).
    pub fn shell(&self) -> &'static str {
        SHELL
    }

    /// Arguments for [`shell`](Self::shell), ending with the command line.
    pub fn shell_args(&self) -> [&str; 2] {
        [SHELL_FLAG, &self.line]
    }
}

#[cfg(not(windows))]
const PING_PREFIX: &str = "ping -c 1";
#[cfg(windows)]
const PING_PREFIX: &str = "ping -n 1";

#[cfg(not(windows))]
const SHELL: &str = "sh";
#[cfg(windows)]
const SHELL: &str = "cmd";

#[cfg(not(windows))]
const SHELL_FLAG: &str = "-c";
#[cfg(windows)]
const SHELL_FLAG: &str = "/C";

/// Joins the lines of captured stdout with `\n`.
///
/// Line terminators (`\n` or `\r\n`) are dropped, so the result carries no
/// trailing newline. Invalid UTF-8 is replaced rather than rejected.
pub fn render_output(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .collect::<Vec<_>>()
        .join("\n")
}
