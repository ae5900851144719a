//! Application layer for agent-launcher
//!
//! This crate contains use cases, port definitions, and the input records
//! of selection resolution. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{EnvOverrides, ExplicitArgs};
pub use ports::{
    binary_locator::BinaryLocator,
    clock::{Clock, SystemClock},
    defaults_store::{DefaultsStore, DefaultsStoreError},
    history::{HistoryEntry, HistoryLogger, NoHistory},
    mode_progress::{LoopEndReason, ModeNotifier, NoModeProgress, Stage},
    process::{CapturedOutput, ProcessError, ProcessExecutor},
    prompt::{NonInteractivePrompt, PromptError, PromptPort},
};
pub use use_cases::check_version::{CheckVersionUseCase, VersionCheckError, VersionReport};
pub use use_cases::confirm::{choose_agent, confirm};
pub use use_cases::ensure_ready::{EnsureAgentReadyUseCase, ReadinessError};
pub use use_cases::launch_agent::{LaunchAgentUseCase, LaunchError};
pub use use_cases::resolve_selection::{
    Resolution, ResolveError, ResolveInput, SkipReason, SkippedDir, resolve_selection,
};
