//! Terminal implementation of the prompt port.
//!
//! Answers are read line by line from stdin. Every read is bounded by a
//! timeout and races Ctrl+C, so a prompt can end in an answer, an
//! interruption, a timeout or a closed input.

use async_trait::async_trait;
use launcher_application::{PromptError, PromptPort};
use std::io::{IsTerminal, Write};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

/// How long a prompt waits for an answer.
pub const PROMPT_TIMEOUT: Duration = Duration::from_secs(300);

pub struct TerminalPrompt {
    reader: Mutex<BufReader<Stdin>>,
    interactive: bool,
    timeout: Duration,
}

impl TerminalPrompt {
    /// Interactive when both stdin and stdout are terminals.
    pub fn new() -> Self {
        Self {
            reader: Mutex::new(BufReader::new(tokio::io::stdin())),
            interactive: std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
            timeout: PROMPT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptPort for TerminalPrompt {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    async fn read_line(&self, prompt: &str) -> Result<String, PromptError> {
        if !self.interactive {
            return Err(PromptError::NotInteractive);
        }

        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "{}", prompt);
        let _ = stdout.flush();

        let mut reader = self.reader.lock().await;
        let mut line = String::new();

        let result = tokio::select! {
            read = tokio::time::timeout(self.timeout, reader.read_line(&mut line)) => match read {
                Err(_) => Err(PromptError::TimedOut(self.timeout)),
                Ok(Err(e)) => Err(PromptError::Io(e.to_string())),
                Ok(Ok(0)) => Err(PromptError::Closed),
                Ok(Ok(_)) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            },
            _ = tokio::signal::ctrl_c() => Err(PromptError::Interrupted),
        };

        if let Err(e) = &result {
            debug!("Prompt ended without an answer: {:?}", e);
            // Leave the cursor on a fresh line after ^C or a timeout.
            println!();
        }
        result
    }

    fn notice(&self, message: &str) {
        eprintln!("{}", message);
    }
}
