//! Process executor backed by `tokio::process`.

use async_trait::async_trait;
use launcher_application::ports::process::{CapturedOutput, ProcessError, ProcessExecutor};
use launcher_domain::{CommandLine, ExecutionOutcome, FAILURE_EXIT_CODE};
use std::io::Write;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Time an interrupted child gets to exit on its own before it is killed.
pub const INTERRUPT_GRACE: Duration = Duration::from_millis(250);

/// Runs agents as child processes sharing the launcher's terminal.
#[derive(Debug, Default)]
pub struct TokioProcessExecutor;

impl TokioProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    fn command(program: &Path, command: &CommandLine) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(command.args());
        #[cfg(unix)]
        cmd.arg0(command.program());
        cmd
    }
}

#[async_trait]
impl ProcessExecutor for TokioProcessExecutor {
    async fn run(&self, program: &Path, command: &CommandLine) -> ExecutionOutcome {
        let mut child = match Self::command(program, command).spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to spawn {}: {}", program.display(), e);
                return ExecutionOutcome::launch_failed(e.to_string());
            }
        };

        tokio::select! {
            biased;
            status = child.wait() => match status {
                Ok(status) => outcome_from_status(status),
                Err(e) => ExecutionOutcome::launch_failed(e.to_string()),
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted while waiting for {}", command.program());
                // The child got the same SIGINT from the terminal.
                if tokio::time::timeout(INTERRUPT_GRACE, child.wait()).await.is_err() {
                    debug!("Child still running after grace period, killing it");
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                }
                ExecutionOutcome::interrupted()
            }
        }
    }

    async fn capture(
        &self,
        program: &Path,
        command: &CommandLine,
        timeout: Duration,
    ) -> Result<CapturedOutput, ProcessError> {
        let mut cmd = Self::command(program, command);
        cmd.stdin(Stdio::null()).kill_on_drop(true);

        let output = tokio::time::timeout(timeout, cmd.output())
            .await
            .map_err(|_| ProcessError::TimedOut {
                program: command.program().to_string(),
                timeout,
            })?
            .map_err(|e| ProcessError::Spawn {
                program: command.program().to_string(),
                message: e.to_string(),
            })?;

        Ok(CapturedOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn hand_off(&self, program: &Path, command: &CommandLine) -> Result<i32, ProcessError> {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();

        let mut cmd = std::process::Command::new(program);
        cmd.args(command.args());
        replace_process(cmd, command.program())
    }
}

/// Replace the launcher with `cmd`. Only returns on failure.
#[cfg(unix)]
fn replace_process(mut cmd: std::process::Command, argv0: &str) -> Result<i32, ProcessError> {
    use std::os::unix::process::CommandExt;
    let error = cmd.arg0(argv0).exec();
    Err(ProcessError::Spawn {
        program: argv0.to_string(),
        message: error.to_string(),
    })
}

/// Run `cmd` to completion and pass its exit code on.
#[cfg(not(unix))]
fn replace_process(mut cmd: std::process::Command, argv0: &str) -> Result<i32, ProcessError> {
    let status = cmd.status().map_err(|e| ProcessError::Spawn {
        program: argv0.to_string(),
        message: e.to_string(),
    })?;
    Ok(status.code().unwrap_or(FAILURE_EXIT_CODE))
}

/// Map an exit status to an outcome. Death by SIGINT counts as an interrupt;
/// other signals report `128 + signal`.
fn outcome_from_status(status: ExitStatus) -> ExecutionOutcome {
    if let Some(code) = status.code() {
        return ExecutionOutcome::completed(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            if signal == libc::SIGINT {
                return ExecutionOutcome::interrupted();
            }
            return ExecutionOutcome::completed(128 + signal);
        }
    }

    ExecutionOutcome::completed(FAILURE_EXIT_CODE)
}
