//! Answer parsing for the bilingual (English/French) prompts.
//!
//! Everything here is pure; reading the answer is the prompt port's job.

use crate::agent::kind::AgentKind;

const YES_ANSWERS: [&str; 4] = ["y", "yes", "o", "oui"];
const NO_ANSWERS: [&str; 3] = ["n", "no", "non"];
const TRUTHY_VALUES: [&str; 4] = ["1", "true", "yes", "y"];

/// Reprompt message for an answer that is neither yes nor no.
pub const INVALID_YES_NO: &str =
    "Merci de répondre par y/o pour Oui ou n pour Non.\nPlease answer y for Yes or n for No.";

/// Reprompt message for an unrecognised agent choice.
pub const INVALID_AGENT_CHOICE: &str =
    "Réponse invalide. Merci de choisir 1/Codex ou 2/Claude.\nInvalid answer. Please choose 1/Codex or 2/Claude.";

/// Parse a yes/no answer. An empty answer selects `default`; anything
/// unrecognised yields `None` so the caller can reprompt.
pub fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    let answer = answer.trim().to_lowercase();
    if answer.is_empty() {
        return Some(default);
    }
    if YES_ANSWERS.contains(&answer.as_str()) {
        Some(true)
    } else if NO_ANSWERS.contains(&answer.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Choice hint appended to a yes/no question.
pub fn yes_no_suffix(default: bool) -> &'static str {
    if default {
        "[Y/n | O/N] : "
    } else {
        "[y/N | o/N] : "
    }
}

/// Full yes/no prompt line for `question`.
pub fn yes_no_prompt(question: &str, default: bool) -> String {
    format!("{} {}", question, yes_no_suffix(default))
}

/// Prompt line for the agent selection question.
pub fn agent_choice_prompt(default: Option<AgentKind>) -> String {
    let default_hint = default
        .map(|agent| format!(" (default: {})", agent.as_str()))
        .unwrap_or_default();
    let choices = AgentKind::ALL
        .iter()
        .enumerate()
        .map(|(i, agent)| format!("({}) {}", i + 1, agent.label()))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Agent ?{default_hint} {choices} - tapez le numéro ou le nom: ")
}

/// Parse an agent choice: a 1-based index or an agent name. An empty
/// answer selects `default`, which may itself be absent.
pub fn parse_agent_choice(answer: &str, default: Option<AgentKind>) -> Option<AgentKind> {
    let answer = answer.trim();
    if answer.is_empty() {
        return default;
    }
    if let Ok(index) = answer.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| AgentKind::ALL.get(i))
            .copied();
    }
    answer.parse().ok()
}

/// Truthy parsing for environment overrides: `1`, `true`, `yes`, `y`
/// (case-insensitive) are true, everything else is false.
pub fn is_truthy(value: &str) -> bool {
    TRUTHY_VALUES.contains(&value.trim().to_lowercase().as_str())
}
