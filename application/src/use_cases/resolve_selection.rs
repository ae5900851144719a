//! Selection resolution use case.
//!
//! Merges the four input tiers into one immutable [`Selection`]. For every
//! field the first tier that yields a value wins:
//!
//! | Field  | Order |
//! |--------|-------|
//! | agent  | explicit → environment → prompt (interactive only) → persisted default |
//! | bypass | explicit → environment → confirmation (interactive only) → persisted default → `false` |
//! | model  | explicit → environment → persisted default |
//! | dirs   | explicit only, each validated |
//! | loop   | explicit only, normalized |
//!
//! Nothing is persisted here.

use crate::config::{EnvOverrides, ExplicitArgs};
use crate::ports::prompt::{PromptError, PromptPort};
use crate::use_cases::confirm::{choose_agent, confirm};
use launcher_domain::{LoopDuration, PersistedDefaults, Selection};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Question asked when no tier supplies the bypass flag.
pub const BYPASS_QUESTION: &str = "Dangerously bypass approvals & sandbox ?";

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No agent specified and not in interactive mode.")]
    NoAgentSpecified,

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Everything the resolver reads.
#[derive(Debug, Clone, Default)]
pub struct ResolveInput {
    pub args: ExplicitArgs,
    pub env: EnvOverrides,
    pub defaults: PersistedDefaults,
    /// Home directory used to expand `~` in extra directories.
    pub home_dir: Option<PathBuf>,
}

/// Why an extra directory was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Missing,
    NotADirectory,
}

/// An extra directory that did not survive validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDir {
    /// The value as given by the user.
    pub input: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::Missing => write!(
                f,
                "Warning: Directory '{0}' does not exist. Skipping.\nAttention : Le répertoire '{0}' n'existe pas. Ignoré.",
                self.input
            ),
            SkipReason::NotADirectory => write!(
                f,
                "Warning: '{0}' is not a directory. Skipping.\nAttention : '{0}' n'est pas un répertoire. Ignoré.",
                self.input
            ),
        }
    }
}

/// Resolver output: the selection plus one entry per dropped directory.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub selection: Selection,
    pub skipped_dirs: Vec<SkippedDir>,
}

/// Resolve the selection, prompting only when `prompt` is interactive.
pub async fn resolve_selection(
    input: &ResolveInput,
    prompt: &dyn PromptPort,
) -> Result<Resolution, ResolveError> {
    let ResolveInput {
        args,
        env,
        defaults,
        home_dir,
    } = input;
    let interactive = prompt.is_interactive();

    let agent = match args.agent.or(env.agent) {
        Some(agent) => agent,
        None if interactive => choose_agent(prompt, defaults.default_agent).await?,
        None => defaults.default_agent.ok_or(ResolveError::NoAgentSpecified)?,
    };

    let bypass = match args.bypass.or(env.bypass) {
        Some(bypass) => bypass,
        None if interactive => {
            confirm(prompt, BYPASS_QUESTION, defaults.default_bypass.unwrap_or(false)).await?
        }
        None => defaults.default_bypass.unwrap_or(false),
    };

    let model = non_blank(&args.model)
        .or_else(|| non_blank(&env.model))
        .or_else(|| non_blank(&defaults.default_model));

    let (add_dirs, skipped_dirs) = validate_directories(&args.add_dirs, home_dir.as_deref());
    for skipped in &skipped_dirs {
        warn!(dir = %skipped.input, reason = ?skipped.reason, "Skipping extra directory");
    }

    let selection = Selection::new(agent)
        .with_bypass(bypass)
        .with_model(model)
        .with_add_dirs(add_dirs)
        .with_dry_run(args.dry_run)
        .with_review_mode(args.review)
        .with_loop_duration(args.loop_minutes.map(LoopDuration::from_input));

    debug!(?selection, "Selection resolved");
    Ok(Resolution {
        selection,
        skipped_dirs,
    })
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

/// Validate extra directories independently, preserving order.
///
/// `~` is expanded against `home`; survivors are returned in canonical
/// absolute form.
pub fn validate_directories(
    inputs: &[String],
    home: Option<&Path>,
) -> (Vec<PathBuf>, Vec<SkippedDir>) {
    let mut valid = Vec::new();
    let mut skipped = Vec::new();

    for input in inputs {
        let path = expand_tilde(input, home);
        let reason = match std::fs::metadata(&path) {
            Err(_) => Some(SkipReason::Missing),
            Ok(meta) if !meta.is_dir() => Some(SkipReason::NotADirectory),
            Ok(_) => None,
        };
        match reason {
            Some(reason) => skipped.push(SkippedDir {
                input: input.clone(),
                reason,
            }),
            None => valid.push(std::fs::canonicalize(&path).unwrap_or(path)),
        }
    }

    (valid, skipped)
}

fn expand_tilde(input: &str, home: Option<&Path>) -> PathBuf {
    match (input, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (_, Some(home)) if input.starts_with("~/") => home.join(&input[2..]),
        _ => PathBuf::from(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedPrompt;
    use launcher_domain::AgentKind;

    fn defaults(agent: AgentKind, bypass: bool, model: &str) -> PersistedDefaults {
        PersistedDefaults {
            default_agent: Some(agent),
            default_bypass: Some(bypass),
            default_model: Some(model.to_string()),
        }
    }

    fn env(agent: AgentKind, bypass: bool, model: &str) -> EnvOverrides {
        EnvOverrides {
            agent: Some(agent),
            bypass: Some(bypass),
            model: Some(model.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_explicit_args_win_over_every_tier() {
        let input = ResolveInput {
            args: ExplicitArgs::default()
                .with_agent(AgentKind::Codex)
                .with_bypass(false)
                .with_model("from-args"),
            env: env(AgentKind::Claude, true, "from-env"),
            defaults: defaults(AgentKind::Claude, true, "from-defaults"),
            home_dir: None,
        };
        // An interactive prompt with no answers: asking anything would fail.
        let prompt = ScriptedPrompt::interactive(&[]);

        let resolution = resolve_selection(&input, &prompt).await.unwrap();
        let selection = resolution.selection;
        assert_eq!(selection.agent(), AgentKind::Codex);
        assert!(!selection.bypass());
        assert_eq!(selection.model(), Some("from-args"));
        assert!(prompt.asked().is_empty());
    }

    #[tokio::test]
    async fn test_environment_wins_over_prompt_and_defaults() {
        let input = ResolveInput {
            env: env(AgentKind::Claude, true, "from-env"),
            defaults: defaults(AgentKind::Codex, false, "from-defaults"),
            ..Default::default()
        };
        let prompt = ScriptedPrompt::interactive(&[]);

        let selection = resolve_selection(&input, &prompt).await.unwrap().selection;
        assert_eq!(selection.agent(), AgentKind::Claude);
        assert!(selection.bypass());
        assert_eq!(selection.model(), Some("from-env"));
        assert!(prompt.asked().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_wins_over_defaults_when_interactive() {
        let input = ResolveInput {
            defaults: defaults(AgentKind::Codex, false, "from-defaults"),
            ..Default::default()
        };
        let prompt = ScriptedPrompt::interactive(&["claude", "o"]);

        let selection = resolve_selection(&input, &prompt).await.unwrap().selection;
        assert_eq!(selection.agent(), AgentKind::Claude);
        assert!(selection.bypass());
        assert_eq!(selection.model(), Some("from-defaults"));

        let asked = prompt.asked();
        assert_eq!(asked.len(), 2);
        assert!(asked[0].contains("(default: codex)"));
        assert_eq!(asked[1], "Dangerously bypass approvals & sandbox ? [y/N | o/N] : ");
    }

    #[tokio::test]
    async fn test_bypass_prompt_defaults_to_persisted_value() {
        let input = ResolveInput {
            args: ExplicitArgs::default().with_agent(AgentKind::Codex),
            defaults: PersistedDefaults {
                default_bypass: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let prompt = ScriptedPrompt::interactive(&[""]);

        let selection = resolve_selection(&input, &prompt).await.unwrap().selection;
        assert!(selection.bypass());
        assert!(prompt.asked()[0].ends_with("[Y/n | O/N] : "));
    }

    #[tokio::test]
    async fn test_defaults_used_when_not_interactive() {
        let input = ResolveInput {
            defaults: defaults(AgentKind::Claude, true, "sonnet"),
            ..Default::default()
        };
        let prompt = ScriptedPrompt::non_interactive();

        let selection = resolve_selection(&input, &prompt).await.unwrap().selection;
        assert_eq!(selection.agent(), AgentKind::Claude);
        assert!(selection.bypass());
        assert_eq!(selection.model(), Some("sonnet"));
    }

    #[tokio::test]
    async fn test_bypass_falls_back_to_false() {
        let input = ResolveInput {
            args: ExplicitArgs::default().with_agent(AgentKind::Codex),
            ..Default::default()
        };
        let selection = resolve_selection(&input, &ScriptedPrompt::non_interactive())
            .await
            .unwrap()
            .selection;
        assert!(!selection.bypass());
        assert!(selection.model().is_none());
    }

    #[tokio::test]
    async fn test_no_agent_in_non_interactive_context_fails() {
        let input = ResolveInput::default();
        let result = resolve_selection(&input, &ScriptedPrompt::non_interactive()).await;
        assert!(matches!(result, Err(ResolveError::NoAgentSpecified)));
    }

    #[tokio::test]
    async fn test_interrupt_at_agent_prompt_propagates() {
        let input = ResolveInput::default();
        let prompt = ScriptedPrompt::with_results(vec![Err(PromptError::Interrupted)]);
        let result = resolve_selection(&input, &prompt).await;
        assert!(matches!(
            result,
            Err(ResolveError::Prompt(PromptError::Interrupted))
        ));
    }

    #[tokio::test]
    async fn test_blank_model_falls_through_tiers() {
        let input = ResolveInput {
            args: ExplicitArgs::default()
                .with_agent(AgentKind::Codex)
                .with_bypass(false)
                .with_model(""),
            defaults: PersistedDefaults {
                default_model: Some("gpt-5".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let selection = resolve_selection(&input, &ScriptedPrompt::non_interactive())
            .await
            .unwrap()
            .selection;
        assert_eq!(selection.model(), Some("gpt-5"));
    }

    #[tokio::test]
    async fn test_modes_and_loop_normalization() {
        let input = ResolveInput {
            args: ExplicitArgs::default()
                .with_agent(AgentKind::Claude)
                .with_bypass(true)
                .with_dry_run(true)
                .with_review(true)
                .with_loop_minutes(-5),
            ..Default::default()
        };
        let selection = resolve_selection(&input, &ScriptedPrompt::non_interactive())
            .await
            .unwrap()
            .selection;
        assert!(selection.dry_run());
        assert!(selection.review_mode());
        assert_eq!(selection.loop_duration().map(|d| d.minutes()), Some(60));
    }

    #[test]
    fn test_validate_directories_keeps_only_existing_directories() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("project");
        std::fs::create_dir(&dir).unwrap();
        let file = temp.path().join("hosts");
        std::fs::write(&file, "127.0.0.1 localhost").unwrap();
        let missing = temp.path().join("does/not/exist");

        let inputs = vec![
            dir.display().to_string(),
            missing.display().to_string(),
            file.display().to_string(),
        ];
        let (valid, skipped) = validate_directories(&inputs, None);

        assert_eq!(valid, vec![std::fs::canonicalize(&dir).unwrap()]);
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].reason, SkipReason::Missing);
        assert_eq!(skipped[0].input, inputs[1]);
        assert_eq!(skipped[1].reason, SkipReason::NotADirectory);
        assert!(skipped[1].to_string().contains("n'est pas un répertoire"));
    }

    #[test]
    fn test_validate_directories_expands_tilde_and_keeps_order() {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir(home.path().join("b")).unwrap();
        std::fs::create_dir(home.path().join("a")).unwrap();

        let inputs = vec!["~/b".to_string(), "~".to_string(), "~/a".to_string()];
        let (valid, skipped) = validate_directories(&inputs, Some(home.path()));

        let home = std::fs::canonicalize(home.path()).unwrap();
        assert!(skipped.is_empty());
        assert_eq!(valid, vec![home.join("b"), home.clone(), home.join("a")]);
        assert!(valid.iter().all(|p| p.is_absolute()));
    }
}
