//! Launch agent use case
//!
//! Drives one resolved [`Selection`] through its [`ExecutionMode`]:
//!
//! - **Normal** ([`normal`]): hand control over to the agent
//! - **Review** ([`review`]): run the agent, then let the other agent review
//! - **Loop** ([`looping`]): repeat the agent until the time budget runs out
//!
//! Agents run strictly one at a time. Blocking runs go through
//! [`ProcessExecutor::run`]; the Normal-mode launch goes through
//! [`ProcessExecutor::hand_off`] and does not come back on Unix.

mod looping;
mod normal;
mod review;

pub use looping::MIN_ITERATION_TIME;

use crate::ports::binary_locator::BinaryLocator;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::history::{HistoryLogger, NoHistory};
use crate::ports::mode_progress::{ModeNotifier, NoModeProgress};
use crate::ports::process::{ProcessError, ProcessExecutor};
use crate::ports::prompt::{PromptError, PromptPort};
use launcher_domain::{ExecutionMode, ExecutionOutcome, Selection, build_command};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Impossible de trouver la commande '{0}'. Vérifiez l'installation.")]
    BinaryNotFound(String),

    #[error(transparent)]
    HandOff(#[from] ProcessError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Use case for executing a resolved selection.
pub struct LaunchAgentUseCase {
    executor: Arc<dyn ProcessExecutor>,
    locator: Arc<dyn BinaryLocator>,
    prompt: Arc<dyn PromptPort>,
    history: Arc<dyn HistoryLogger>,
    notifier: Arc<dyn ModeNotifier>,
    clock: Arc<dyn Clock>,
}

impl LaunchAgentUseCase {
    pub fn new(
        executor: Arc<dyn ProcessExecutor>,
        locator: Arc<dyn BinaryLocator>,
        prompt: Arc<dyn PromptPort>,
    ) -> Self {
        Self {
            executor,
            locator,
            prompt,
            history: Arc::new(NoHistory),
            notifier: Arc::new(NoModeProgress),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_history(mut self, history: Arc<dyn HistoryLogger>) -> Self {
        self.history = history;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn ModeNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Execute `selection` and return the exit code for the launcher.
    ///
    /// In Normal mode on Unix a successful launch never returns.
    pub async fn execute(
        &self,
        selection: &Selection,
        passthrough: &[String],
    ) -> Result<i32, LaunchError> {
        let mode = ExecutionMode::for_selection(selection);
        info!(agent = %selection.agent(), ?mode, "Executing selection");

        match mode {
            ExecutionMode::Normal => self.run_normal(selection, passthrough),
            ExecutionMode::Review => self.run_review(selection, passthrough).await,
            ExecutionMode::Loop(duration) => {
                self.run_loop(selection, passthrough, duration).await?;
                Ok(0)
            }
        }
    }

    /// Run one blocking invocation of `selection`'s agent.
    ///
    /// A binary that cannot be located is reported as a launch failure, so a
    /// binary removed mid-loop does not abort the loop.
    async fn run_stage(&self, selection: &Selection, passthrough: &[String]) -> ExecutionOutcome {
        let command = build_command(selection, passthrough);
        let Some(program) = self.locator.locate(command.program()) else {
            return ExecutionOutcome::launch_failed(format!(
                "command '{}' not found",
                command.program()
            ));
        };
        debug!(program = %program.display(), %command, "Running agent");
        self.executor.run(&program, &command).await
    }
}
