//! Version check use case (`--check-version`).

use crate::ports::binary_locator::BinaryLocator;
use crate::ports::process::{ProcessError, ProcessExecutor};
use crate::ports::prompt::{PromptError, PromptPort};
use crate::use_cases::confirm::choose_agent;
use crate::use_cases::resolve_selection::ResolveInput;
use launcher_domain::{AgentKind, CommandLine};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// How long `<agent> --version` may take.
pub const VERSION_TIMEOUT: Duration = Duration::from_secs(5);

const NO_VERSION: &str = "Version information not available";

#[derive(Error, Debug)]
pub enum VersionCheckError {
    #[error("No agent specified for version check.")]
    NoAgentSpecified,

    #[error("{} is not installed.", .0.label())]
    NotInstalled(AgentKind),

    #[error("Could not check version: {0}")]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Version information of one agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub agent: AgentKind,
    pub text: String,
}

pub struct CheckVersionUseCase {
    locator: Arc<dyn BinaryLocator>,
    executor: Arc<dyn ProcessExecutor>,
    prompt: Arc<dyn PromptPort>,
}

impl CheckVersionUseCase {
    pub fn new(
        locator: Arc<dyn BinaryLocator>,
        executor: Arc<dyn ProcessExecutor>,
        prompt: Arc<dyn PromptPort>,
    ) -> Self {
        Self {
            locator,
            executor,
            prompt,
        }
    }

    /// Pick the agent (explicit → environment → persisted default → prompt)
    /// and report its version.
    pub async fn execute(&self, input: &ResolveInput) -> Result<VersionReport, VersionCheckError> {
        let agent = match input
            .args
            .agent
            .or(input.env.agent)
            .or(input.defaults.default_agent)
        {
            Some(agent) => agent,
            None if self.prompt.is_interactive() => {
                choose_agent(self.prompt.as_ref(), None).await?
            }
            None => return Err(VersionCheckError::NoAgentSpecified),
        };

        let program = self
            .locator
            .locate(agent.binary())
            .ok_or(VersionCheckError::NotInstalled(agent))?;
        let command = CommandLine::new(agent.binary(), vec!["--version".to_string()]);
        let output = self
            .executor
            .capture(&program, &command, VERSION_TIMEOUT)
            .await?;

        let text = [output.stdout.trim_end(), output.stderr.trim_end()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(NO_VERSION)
            .to_string();
        Ok(VersionReport { agent, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EnvOverrides, ExplicitArgs};
    use crate::ports::process::CapturedOutput;
    use crate::use_cases::test_support::{FakeLocator, RecordingExecutor, ScriptedPrompt};
    use launcher_domain::PersistedDefaults;

    fn captured(stdout: &str, stderr: &str) -> Result<CapturedOutput, ProcessError> {
        Ok(CapturedOutput {
            exit_code: Some(0),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    fn use_case(executor: Arc<RecordingExecutor>, prompt: ScriptedPrompt) -> CheckVersionUseCase {
        CheckVersionUseCase::new(
            Arc::new(FakeLocator::with(&["codex", "claude"])),
            executor,
            Arc::new(prompt),
        )
    }

    #[tokio::test]
    async fn test_explicit_agent_wins() {
        let executor = Arc::new(
            RecordingExecutor::new(vec![]).with_captures(vec![captured("codex-cli 0.46.0\n", "")]),
        );
        let uc = use_case(executor.clone(), ScriptedPrompt::non_interactive());
        let input = ResolveInput {
            args: ExplicitArgs::default().with_agent(AgentKind::Codex),
            env: EnvOverrides {
                agent: Some(AgentKind::Claude),
                ..Default::default()
            },
            ..Default::default()
        };

        let report = uc.execute(&input).await.unwrap();

        assert_eq!(report.agent, AgentKind::Codex);
        assert_eq!(report.text, "codex-cli 0.46.0");
        assert_eq!(
            executor.captured.lock().unwrap()[0].argv(),
            vec!["codex", "--version"]
        );
    }

    #[tokio::test]
    async fn test_persisted_default_wins_over_prompt() {
        let executor =
            Arc::new(RecordingExecutor::new(vec![]).with_captures(vec![captured("", "2.0.1")]));
        let uc = use_case(executor, ScriptedPrompt::interactive(&[]));
        let input = ResolveInput {
            defaults: PersistedDefaults {
                default_agent: Some(AgentKind::Claude),
                ..Default::default()
            },
            ..Default::default()
        };

        let report = uc.execute(&input).await.unwrap();

        assert_eq!(report.agent, AgentKind::Claude);
        assert_eq!(report.text, "2.0.1");
    }

    #[tokio::test]
    async fn test_prompts_when_nothing_else_applies() {
        let executor = Arc::new(RecordingExecutor::new(vec![]).with_captures(vec![captured("", "")]));
        let uc = use_case(executor, ScriptedPrompt::interactive(&["1"]));

        let report = uc.execute(&ResolveInput::default()).await.unwrap();

        assert_eq!(report.agent, AgentKind::Codex);
        assert_eq!(report.text, NO_VERSION);
    }

    #[tokio::test]
    async fn test_no_agent_without_terminal_is_an_error() {
        let uc = use_case(
            Arc::new(RecordingExecutor::new(vec![])),
            ScriptedPrompt::non_interactive(),
        );

        let err = uc.execute(&ResolveInput::default()).await.unwrap_err();

        assert!(matches!(err, VersionCheckError::NoAgentSpecified));
    }

    #[tokio::test]
    async fn test_missing_binary_is_reported() {
        let uc = CheckVersionUseCase::new(
            Arc::new(FakeLocator::with(&[])),
            Arc::new(RecordingExecutor::new(vec![])),
            Arc::new(ScriptedPrompt::non_interactive()),
        );
        let input = ResolveInput {
            args: ExplicitArgs::default().with_agent(AgentKind::Claude),
            ..Default::default()
        };

        let err = uc.execute(&input).await.unwrap_err();

        assert_eq!(err.to_string(), "Claude is not installed.");
    }

    #[tokio::test]
    async fn test_timeout_is_an_error() {
        let executor = Arc::new(RecordingExecutor::new(vec![]).with_captures(vec![Err(
            ProcessError::TimedOut {
                program: "codex".to_string(),
                timeout: VERSION_TIMEOUT,
            },
        )]));
        let uc = use_case(executor, ScriptedPrompt::non_interactive());
        let input = ResolveInput {
            args: ExplicitArgs::default().with_agent(AgentKind::Codex),
            ..Default::default()
        };

        let err = uc.execute(&input).await.unwrap_err();

        assert!(matches!(err, VersionCheckError::Process(_)));
        assert!(err.to_string().starts_with("Could not check version"));
    }
}
