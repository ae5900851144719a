//! Interactive prompts

pub mod terminal;

pub use terminal::{PROMPT_TIMEOUT, TerminalPrompt};
