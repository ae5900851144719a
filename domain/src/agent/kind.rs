//! Agent identity value object.
//!
//! The launcher knows exactly two coding agents. Each variant carries its
//! static metadata (display label, executable name, bypass flag literal,
//! npm package and documentation link), resolved by exhaustive matching so
//! that an "unknown agent" can never exist at run time.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported coding agent (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// OpenAI Codex CLI
    Codex,
    /// Anthropic Claude Code CLI
    Claude,
}

impl AgentKind {
    /// Every agent, in prompt order ("1" is the first entry).
    pub const ALL: [AgentKind; 2] = [AgentKind::Codex, AgentKind::Claude];

    /// Stable lowercase identifier used in config files, env vars and history.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Codex => "codex",
            AgentKind::Claude => "claude",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AgentKind::Codex => "Codex",
            AgentKind::Claude => "Claude",
        }
    }

    /// Executable name looked up on the search path.
    pub fn binary(&self) -> &'static str {
        match self {
            AgentKind::Codex => "codex",
            AgentKind::Claude => "claude",
        }
    }

    /// Flag that disables the agent's own approvals and sandboxing.
    pub fn bypass_flag(&self) -> &'static str {
        match self {
            AgentKind::Codex => "--dangerously-bypass-approvals-and-sandbox",
            AgentKind::Claude => "--dangerously-skip-permissions",
        }
    }

    /// npm package providing the agent CLI.
    pub fn npm_package(&self) -> &'static str {
        match self {
            AgentKind::Codex => "@openai/codex",
            AgentKind::Claude => "@anthropic-ai/claude-code",
        }
    }

    /// Official documentation for the agent CLI.
    pub fn docs_url(&self) -> &'static str {
        match self {
            AgentKind::Codex => "https://github.com/openai/codex#readme",
            AgentKind::Claude => "https://github.com/anthropics/claude-code",
        }
    }

    /// The agent that reviews this one's work.
    pub fn other(&self) -> AgentKind {
        match self {
            AgentKind::Codex => AgentKind::Claude,
            AgentKind::Claude => AgentKind::Codex,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "codex" => Ok(AgentKind::Codex),
            "claude" => Ok(AgentKind::Claude),
            _ => Err(DomainError::UnknownAgent(s.to_string())),
        }
    }
}
