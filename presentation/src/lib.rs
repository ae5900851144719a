//! Presentation layer for agent-launcher
//!
//! This crate contains the CLI definition, the terminal prompt,
//! console formatting and the review/loop progress reporter.

pub mod cli;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{AgentArg, Cli};
pub use output::console::{ConsoleFormatter, supports_color};
pub use progress::reporter::ConsoleModeReporter;
pub use prompt::terminal::{PROMPT_TIMEOUT, TerminalPrompt};
