//! Bilingual confirmation helper.
//!
//! Both questions reprompt until they get a usable answer. Interrupts,
//! timeouts and closed input surface as [`PromptError`] for the caller to
//! turn into a mode-level decision.

use crate::ports::prompt::{PromptError, PromptPort};
use launcher_domain::AgentKind;
use launcher_domain::interaction::{
    INVALID_AGENT_CHOICE, INVALID_YES_NO, agent_choice_prompt, parse_agent_choice, parse_yes_no,
    yes_no_prompt,
};

/// Ask a yes/no question; an empty answer selects `default`.
pub async fn confirm(
    prompt: &dyn PromptPort,
    question: &str,
    default: bool,
) -> Result<bool, PromptError> {
    let line = yes_no_prompt(question, default);
    loop {
        let answer = prompt.read_line(&line).await?;
        match parse_yes_no(&answer, default) {
            Some(choice) => return Ok(choice),
            None => prompt.notice(INVALID_YES_NO),
        }
    }
}

/// Ask which agent to use; an empty answer selects `default` when there is one.
pub async fn choose_agent(
    prompt: &dyn PromptPort,
    default: Option<AgentKind>,
) -> Result<AgentKind, PromptError> {
    let line = agent_choice_prompt(default);
    loop {
        let answer = prompt.read_line(&line).await?;
        match parse_agent_choice(&answer, default) {
            Some(agent) => return Ok(agent),
            None => prompt.notice(INVALID_AGENT_CHOICE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedPrompt;

    #[tokio::test]
    async fn test_confirm_empty_answer_uses_default() {
        let prompt = ScriptedPrompt::interactive(&["", ""]);
        assert!(confirm(&prompt, "Go?", true).await.unwrap());
        assert!(!confirm(&prompt, "Go?", false).await.unwrap());
        assert_eq!(prompt.asked(), vec!["Go? [Y/n | O/N] : ", "Go? [y/N | o/N] : "]);
    }

    #[tokio::test]
    async fn test_confirm_reprompts_on_invalid_answer() {
        let prompt = ScriptedPrompt::interactive(&["peut-être", "oui"]);
        assert!(confirm(&prompt, "Go?", false).await.unwrap());
        assert_eq!(prompt.asked().len(), 2);
        assert_eq!(prompt.notices(), vec![INVALID_YES_NO.to_string()]);
    }

    #[tokio::test]
    async fn test_confirm_propagates_interrupt() {
        let prompt = ScriptedPrompt::with_results(vec![Err(PromptError::Interrupted)]);
        let result = confirm(&prompt, "Go?", true).await;
        assert_eq!(result, Err(PromptError::Interrupted));
    }

    #[tokio::test]
    async fn test_choose_agent_reprompts_until_valid() {
        let prompt = ScriptedPrompt::interactive(&["", "gemini", "2"]);
        let agent = choose_agent(&prompt, None).await.unwrap();
        assert_eq!(agent, AgentKind::Claude);
        assert_eq!(prompt.asked().len(), 3);
        assert_eq!(prompt.notices().len(), 2);
    }

    #[tokio::test]
    async fn test_choose_agent_empty_answer_uses_default() {
        let prompt = ScriptedPrompt::interactive(&[""]);
        let agent = choose_agent(&prompt, Some(AgentKind::Codex)).await.unwrap();
        assert_eq!(agent, AgentKind::Codex);
    }
}
