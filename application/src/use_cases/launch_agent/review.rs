//! Review mode: primary run, then a review run by the other agent.
//!
//! The primary exit code is the result unless the review step actually
//! runs, in which case the reviewer's exit code replaces it.

use super::{LaunchAgentUseCase, LaunchError};
use crate::ports::mode_progress::Stage;
use crate::ports::prompt::PromptError;
use crate::use_cases::confirm::confirm;
use launcher_domain::{
    FAILURE_EXIT_CODE, INTERRUPT_EXIT_CODE, OutcomeKind, REVIEW_INSTRUCTION, Selection,
};
use tracing::{info, warn};

impl LaunchAgentUseCase {
    pub(super) async fn run_review(
        &self,
        selection: &Selection,
        passthrough: &[String],
    ) -> Result<i32, LaunchError> {
        self.notifier.on_review_primary_start(selection.agent());
        let primary = self.run_stage(selection, passthrough).await;
        match primary.kind {
            OutcomeKind::Interrupted => {
                self.notifier.on_stage_interrupted(Stage::ReviewPrimary);
                return Ok(INTERRUPT_EXIT_CODE);
            }
            OutcomeKind::LaunchFailed => {
                let detail = primary.detail.as_deref().unwrap_or_default();
                warn!(%detail, "Primary agent failed to start");
                self.notifier.on_stage_failed(Stage::ReviewPrimary, detail);
                return Ok(FAILURE_EXIT_CODE);
            }
            OutcomeKind::Completed => {}
        }
        self.notifier.on_review_primary_done(primary.exit_code);

        let reviewer = selection.for_review();
        if self.prompt.is_interactive() {
            let question = format!(
                "[REVIEW MODE] Launch review agent ({})?",
                reviewer.agent().label()
            );
            match confirm(self.prompt.as_ref(), &question, true).await {
                Ok(true) => {}
                Ok(false) => {
                    self.notifier.on_review_skipped(false);
                    return Ok(primary.exit_code);
                }
                Err(PromptError::Interrupted) => {
                    self.notifier.on_review_skipped(true);
                    return Ok(primary.exit_code);
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.notifier.on_review_start(reviewer.agent());
        let review = self
            .run_stage(&reviewer, &[REVIEW_INSTRUCTION.to_string()])
            .await;
        match review.kind {
            OutcomeKind::Interrupted => {
                self.notifier.on_stage_interrupted(Stage::ReviewAgent);
                Ok(INTERRUPT_EXIT_CODE)
            }
            OutcomeKind::LaunchFailed => {
                let detail = review.detail.as_deref().unwrap_or_default();
                warn!(%detail, "Review agent failed to start");
                self.notifier.on_stage_failed(Stage::ReviewAgent, detail);
                Ok(primary.exit_code)
            }
            OutcomeKind::Completed => {
                info!(exit_code = review.exit_code, "Review finished");
                Ok(review.exit_code)
            }
        }
    }
}
