//! Loop mode: repeat the agent until the time budget runs out.
//!
//! Timing is checked between blocking steps only; nothing interrupts a
//! running agent when the deadline passes.

use super::{LaunchAgentUseCase, LaunchError};
use crate::ports::mode_progress::{LoopEndReason, Stage};
use crate::ports::prompt::PromptError;
use crate::use_cases::confirm::confirm;
use launcher_domain::{LoopDuration, OutcomeKind, Selection, iteration_review_instruction};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Another iteration only starts when at least this much time is left.
pub const MIN_ITERATION_TIME: Duration = Duration::from_secs(5 * 60);

const CONTINUE_QUESTION: &str = "[LOOP MODE] Continue to next iteration?";
const LOOP_REVIEW_QUESTION: &str = "[LOOP MODE] Run review agent for this iteration?";

/// What to do after a loop review step.
enum ReviewFlow {
    Continue,
    Stop,
}

impl LaunchAgentUseCase {
    pub(super) async fn run_loop(
        &self,
        selection: &Selection,
        passthrough: &[String],
        duration: LoopDuration,
    ) -> Result<(), LaunchError> {
        let deadline = self.clock.now() + duration.as_duration();
        let reviewer = selection.review_mode().then(|| selection.for_review());
        self.notifier.on_loop_start(
            selection.agent(),
            duration,
            reviewer.as_ref().map(Selection::agent),
        );

        let mut iteration: u32 = 1;
        let mut completed: u32 = 0;
        let reason = loop {
            let now = self.clock.now();
            if now >= deadline {
                break LoopEndReason::DeadlineReached;
            }
            let remaining_minutes = (deadline - now).as_secs() / 60;
            self.notifier
                .on_loop_iteration_start(iteration, remaining_minutes);

            let outcome = self.run_stage(selection, passthrough).await;
            match outcome.kind {
                OutcomeKind::Interrupted => {
                    self.notifier
                        .on_stage_interrupted(Stage::LoopIteration(iteration));
                    break LoopEndReason::Interrupted;
                }
                OutcomeKind::LaunchFailed => {
                    let detail = outcome.detail.as_deref().unwrap_or_default();
                    warn!(iteration, %detail, "Iteration failed to start");
                    self.notifier
                        .on_stage_failed(Stage::LoopIteration(iteration), detail);
                }
                OutcomeKind::Completed => {}
            }
            self.notifier
                .on_loop_iteration_done(iteration, outcome.exit_code);

            // An iteration only counts once its review step is over.
            if let Some(reviewer) = &reviewer
                && self.prompt.is_interactive()
                && let ReviewFlow::Stop = self.run_loop_review(reviewer, iteration).await?
            {
                break LoopEndReason::Interrupted;
            }
            completed = iteration;

            iteration += 1;

            let remaining = deadline.saturating_duration_since(self.clock.now());
            if remaining < MIN_ITERATION_TIME {
                break LoopEndReason::NotEnoughTime;
            }

            if self.prompt.is_interactive() {
                match confirm(self.prompt.as_ref(), CONTINUE_QUESTION, true).await {
                    Ok(true) => {}
                    Ok(false) => break LoopEndReason::Declined,
                    Err(PromptError::Interrupted) => break LoopEndReason::Interrupted,
                    Err(e) => return Err(e.into()),
                }
            }
        };

        info!(?reason, completed, "Loop finished");
        self.notifier.on_loop_end(reason, completed);
        Ok(())
    }

    /// One review step inside the loop, only offered on a terminal. Its exit
    /// code is discarded.
    async fn run_loop_review(
        &self,
        reviewer: &Selection,
        iteration: u32,
    ) -> Result<ReviewFlow, LaunchError> {
        match confirm(self.prompt.as_ref(), LOOP_REVIEW_QUESTION, true).await {
            Ok(true) => {}
            Ok(false) => {
                self.notifier.on_loop_review_skipped();
                return Ok(ReviewFlow::Continue);
            }
            Err(PromptError::Interrupted) => return Ok(ReviewFlow::Stop),
            Err(e) => return Err(e.into()),
        }

        self.notifier.on_loop_review_start(reviewer.agent());
        let outcome = self
            .run_stage(reviewer, &[iteration_review_instruction(iteration)])
            .await;
        match outcome.kind {
            OutcomeKind::Interrupted => {
                self.notifier
                    .on_stage_interrupted(Stage::LoopReview(iteration));
                Ok(ReviewFlow::Stop)
            }
            OutcomeKind::LaunchFailed => {
                let detail = outcome.detail.as_deref().unwrap_or_default();
                self.notifier
                    .on_stage_failed(Stage::LoopReview(iteration), detail);
                Ok(ReviewFlow::Continue)
            }
            OutcomeKind::Completed => {
                debug!(iteration, exit_code = outcome.exit_code, "Loop review finished");
                Ok(ReviewFlow::Continue)
            }
        }
    }
}
