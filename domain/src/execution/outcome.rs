//! Result of one agent invocation.

/// Exit code reported when the user interrupts a run (128 + SIGINT).
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Generic failure exit code.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Classification of an invocation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The process ran and exited on its own (any exit code).
    Completed,
    /// The user interrupted the wait.
    Interrupted,
    /// The process could not be started.
    LaunchFailed,
}

/// Exit code plus classification of one invocation (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub exit_code: i32,
    pub kind: OutcomeKind,
    /// Launch failure detail, for display only.
    pub detail: Option<String>,
}

impl ExecutionOutcome {
    pub fn completed(exit_code: i32) -> Self {
        Self {
            exit_code,
            kind: OutcomeKind::Completed,
            detail: None,
        }
    }

    pub fn interrupted() -> Self {
        Self {
            exit_code: INTERRUPT_EXIT_CODE,
            kind: OutcomeKind::Interrupted,
            detail: None,
        }
    }

    pub fn launch_failed(detail: impl Into<String>) -> Self {
        Self {
            exit_code: FAILURE_EXIT_CODE,
            kind: OutcomeKind::LaunchFailed,
            detail: Some(detail.into()),
        }
    }

    pub fn is_interrupted(&self) -> bool {
        self.kind == OutcomeKind::Interrupted
    }

    pub fn is_launch_failure(&self) -> bool {
        self.kind == OutcomeKind::LaunchFailed
    }
}
