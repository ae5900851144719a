//! Port for the launch history (audit log).
//!
//! Separate from `tracing`: one structured record per Normal-mode launch,
//! written just before control is handed to the agent.

use launcher_domain::{AgentKind, CommandLine, Selection};
use serde::Serialize;

/// One launch record. The adapter adds the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub agent: AgentKind,
    pub bypass: bool,
    pub model: Option<String>,
    pub add_dirs: Vec<String>,
    pub extras: Vec<String>,
    pub command: String,
    pub review_mode: bool,
    pub loop_duration: Option<u32>,
}

impl HistoryEntry {
    pub fn new(selection: &Selection, passthrough: &[String], command: &CommandLine) -> Self {
        Self {
            agent: selection.agent(),
            bypass: selection.bypass(),
            model: selection.model().map(str::to_string),
            add_dirs: selection.add_dir_strings(),
            extras: passthrough.to_vec(),
            command: command.to_string(),
            review_mode: selection.review_mode(),
            loop_duration: selection.loop_duration().map(|d| d.minutes()),
        }
    }
}

/// Port for recording launches.
///
/// `log` is synchronous and non-fallible: a history failure must never stop
/// a launch, so adapters swallow their own errors.
pub trait HistoryLogger: Send + Sync {
    fn log(&self, entry: HistoryEntry);
}

/// No-op implementation for tests and when history is disabled.
pub struct NoHistory;

impl HistoryLogger for NoHistory {
    fn log(&self, _entry: HistoryEntry) {}
}
