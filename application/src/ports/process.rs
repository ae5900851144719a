//! Process executor port.
//!
//! Three ways of running an agent:
//!
//! - [`ProcessExecutor::run`]: blocking run with the terminal attached, used by
//!   the Review and Loop modes and by the npm installer
//! - [`ProcessExecutor::capture`]: run with captured output and a timeout
//! - [`ProcessExecutor::hand_off`]: terminal Normal-mode launch that transfers
//!   control to the agent

use async_trait::async_trait;
use launcher_domain::{CommandLine, ExecutionOutcome};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors from capture and hand-off. Blocking runs report failures through
/// [`ExecutionOutcome`] instead.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Impossible de lancer {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("'{program}' did not finish within {}s", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    #[error("Failed to read output of '{program}': {message}")]
    Output { program: String, message: String },
}

/// Output of a captured run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for launching external processes.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    /// Run `command` with the terminal attached and wait for it.
    ///
    /// `program` is the resolved executable; `command.program()` is used as
    /// argv[0]. Ctrl+C during the wait yields an interrupted outcome.
    async fn run(&self, program: &Path, command: &CommandLine) -> ExecutionOutcome;

    /// Run `command` with captured output, killing it after `timeout`.
    async fn capture(
        &self,
        program: &Path,
        command: &CommandLine,
        timeout: Duration,
    ) -> Result<CapturedOutput, ProcessError>;

    /// Transfer control to `command`.
    ///
    /// On Unix the launcher's process image is replaced and this only returns
    /// on failure. Elsewhere the child runs to completion and its exit code is
    /// returned for the caller to exit with.
    fn hand_off(&self, program: &Path, command: &CommandLine) -> Result<i32, ProcessError>;
}
