//! Execution mode selection.

use crate::selection::entities::Selection;
use crate::selection::value_objects::LoopDuration;

/// How a resolved selection is executed.
///
/// Chosen once, before any process is launched. Loop takes precedence over
/// review; a loop run with review enabled interleaves review steps itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Hand control over to the agent and never come back.
    Normal,
    /// Run the agent, then let the other agent review the result.
    Review,
    /// Repeat the agent until the duration elapses.
    Loop(LoopDuration),
}

impl ExecutionMode {
    pub fn for_selection(selection: &Selection) -> Self {
        match selection.loop_duration() {
            Some(duration) => ExecutionMode::Loop(duration),
            None if selection.review_mode() => ExecutionMode::Review,
            None => ExecutionMode::Normal,
        }
    }

    /// Whether the other agent is invoked at some point during the run.
    pub fn involves_review(&self, selection: &Selection) -> bool {
        match self {
            ExecutionMode::Normal => false,
            ExecutionMode::Review => true,
            ExecutionMode::Loop(_) => selection.review_mode(),
        }
    }
}
