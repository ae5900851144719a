//! Domain layer for agent-launcher
//!
//! This crate contains the core types of the launcher and has no I/O.
//!
//! # Core Concepts
//!
//! - **Agent**: one of the two supported coding-agent CLIs ([`AgentKind`])
//! - **Selection**: the immutable, fully-resolved run request ([`Selection`])
//! - **Execution mode**: Normal, Review or Loop ([`ExecutionMode`])
//! - **Command line**: what actually gets executed ([`CommandLine`])

pub mod agent;
pub mod core;
pub mod execution;
pub mod interaction;
pub mod selection;

// Re-export commonly used types
pub use agent::kind::AgentKind;
pub use core::error::DomainError;
pub use execution::{
    command::{CommandLine, build_command},
    mode::ExecutionMode,
    outcome::{ExecutionOutcome, FAILURE_EXIT_CODE, INTERRUPT_EXIT_CODE, OutcomeKind},
    review::{REVIEW_INSTRUCTION, iteration_review_instruction},
};
pub use selection::{
    defaults::PersistedDefaults,
    entities::Selection,
    value_objects::{DEFAULT_LOOP_MINUTES, LoopDuration},
};
