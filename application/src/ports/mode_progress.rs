//! Progress notification port for the execution modes.
//!
//! The launch use case reports every step of the Normal, Review and Loop
//! modes through [`ModeNotifier`]. The console implementation lives in the
//! presentation layer and renders the `[REVIEW MODE]` / `[LOOP MODE]` lines.

use launcher_domain::{AgentKind, CommandLine, LoopDuration};

/// A blocking agent run inside a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// First run of Review mode.
    ReviewPrimary,
    /// Second run of Review mode, by the other agent.
    ReviewAgent,
    /// Primary run of loop iteration N.
    LoopIteration(u32),
    /// Review run of loop iteration N.
    LoopReview(u32),
}

/// Why a loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEndReason {
    /// The deadline passed.
    DeadlineReached,
    /// Less than the minimum iteration time was left.
    NotEnoughTime,
    /// The user declined to continue.
    Declined,
    /// The user pressed Ctrl+C.
    Interrupted,
}

/// Callback for execution-mode events.
///
/// Every method has a no-op default so implementations only override what
/// they display.
pub trait ModeNotifier: Send + Sync {
    // ==================== Normal ====================

    /// Dry run: `command` would have been executed.
    fn on_dry_run(&self, _command: &CommandLine) {}

    /// Control is about to be handed to `agent`.
    fn on_launching(&self, _agent: AgentKind) {}

    // ==================== Review ====================

    fn on_review_primary_start(&self, _agent: AgentKind) {}

    fn on_review_primary_done(&self, _exit_code: i32) {}

    /// The review step was not run. `cancelled` is true for Ctrl+C at the
    /// confirmation, false for an explicit "no".
    fn on_review_skipped(&self, _cancelled: bool) {}

    fn on_review_start(&self, _reviewer: AgentKind) {}

    // ==================== Loop ====================

    fn on_loop_start(
        &self,
        _agent: AgentKind,
        _duration: LoopDuration,
        _reviewer: Option<AgentKind>,
    ) {
    }

    fn on_loop_iteration_start(&self, _iteration: u32, _remaining_minutes: u64) {}

    fn on_loop_iteration_done(&self, _iteration: u32, _exit_code: i32) {}

    fn on_loop_review_start(&self, _reviewer: AgentKind) {}

    fn on_loop_review_skipped(&self) {}

    fn on_loop_end(&self, _reason: LoopEndReason, _completed: u32) {}

    // ==================== Shared ====================

    fn on_stage_interrupted(&self, _stage: Stage) {}

    fn on_stage_failed(&self, _stage: Stage, _detail: &str) {}
}

/// No-op notifier for when mode output is not needed
pub struct NoModeProgress;

impl ModeNotifier for NoModeProgress {}
