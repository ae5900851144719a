//! Interactive prompt port.
//!
//! The prompt channel is the only source of interactive input. Adapters
//! bound every read by a timeout and turn Ctrl+C into
//! [`PromptError::Interrupted`] so callers can unwind cleanly.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure to obtain an answer from the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// No terminal is attached, so nobody can answer.
    #[error("An answer is required but no interactive terminal is available")]
    NotInteractive,

    /// The user pressed Ctrl+C while the question was pending.
    #[error("Interruption reçue. Annulation.")]
    Interrupted,

    /// Nobody answered within the prompt timeout.
    #[error("Timeout: No input received. Annulation / Cancelled. ({}s)", .0.as_secs())]
    TimedOut(Duration),

    /// Input was closed (EOF) before an answer arrived.
    #[error("Input closed before an answer was given")]
    Closed,

    #[error("Failed to read answer: {0}")]
    Io(String),
}

/// Port for asking the user questions.
#[async_trait]
pub trait PromptPort: Send + Sync {
    /// Whether a human can answer prompts (stdin and stdout are terminals).
    fn is_interactive(&self) -> bool;

    /// Show `prompt` and read one line of input, without its line ending.
    async fn read_line(&self, prompt: &str) -> Result<String, PromptError>;

    /// Print an informational line on the prompt channel.
    fn notice(&self, message: &str);
}

/// Prompt for contexts without a terminal: never interactive, silent.
pub struct NonInteractivePrompt;

#[async_trait]
impl PromptPort for NonInteractivePrompt {
    fn is_interactive(&self) -> bool {
        false
    }

    async fn read_line(&self, _prompt: &str) -> Result<String, PromptError> {
        Err(PromptError::NotInteractive)
    }

    fn notice(&self, _message: &str) {}
}
