//! Normal mode: the launch that does not come back.

use super::{LaunchAgentUseCase, LaunchError};
use crate::ports::history::HistoryEntry;
use launcher_domain::{Selection, build_command};
use tracing::info;

impl LaunchAgentUseCase {
    pub(super) fn run_normal(
        &self,
        selection: &Selection,
        passthrough: &[String],
    ) -> Result<i32, LaunchError> {
        let command = build_command(selection, passthrough);
        let program = self
            .locator
            .locate(command.program())
            .ok_or_else(|| LaunchError::BinaryNotFound(command.program().to_string()))?;

        if selection.dry_run() {
            self.notifier.on_dry_run(&command);
            return Ok(0);
        }

        self.history
            .log(HistoryEntry::new(selection, passthrough, &command));
        self.notifier.on_launching(selection.agent());
        info!(program = %program.display(), "Handing off to agent");

        Ok(self.executor.hand_off(&program, &command)?)
    }
}
