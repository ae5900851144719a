//! Agent readiness use case.
//!
//! Makes sure an agent binary can be located before any mode starts,
//! offering a global npm install when it cannot.

use crate::ports::binary_locator::BinaryLocator;
use crate::ports::process::ProcessExecutor;
use crate::ports::prompt::{PromptError, PromptPort};
use crate::use_cases::confirm::confirm;
use launcher_domain::{
    AgentKind, CommandLine, FAILURE_EXIT_CODE, INTERRUPT_EXIT_CODE, OutcomeKind,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const NPM: &str = "npm";
const NPM_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error(
        "npm n'est pas disponible, impossible d'installer automatiquement.\n\
         Installez Node.js (qui inclut npm) en suivant la documentation officielle :\n\
         - Node.js package manager guide : https://nodejs.org/en/download/package-manager\n\
         - Documentation {} : {}", .agent.label(), .agent.docs_url()
    )]
    NpmUnavailable { agent: AgentKind },

    #[error(
        "Installation annulée. Consultez la documentation pour les étapes détaillées :\n- {}",
        .agent.docs_url()
    )]
    Declined { agent: AgentKind },

    #[error(
        "L'installation npm a échoué. Vérifiez vos permissions ou consultez la documentation :\n- {}",
        .agent.docs_url()
    )]
    InstallFailed { agent: AgentKind, exit_code: i32 },

    #[error("Installation interrompue / Installation interrupted.")]
    Interrupted,

    #[error(
        "L'installation semble terminée mais '{}' reste introuvable.\n\
         Assurez-vous que le dossier global npm est dans votre PATH :\n\
         - npm bin -g -> {}",
        .agent.binary(),
        .npm_bin_dir.as_deref().unwrap_or("(non déterminé)")
    )]
    StillMissing {
        agent: AgentKind,
        npm_bin_dir: Option<String>,
    },

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl ReadinessError {
    /// Exit code the launcher terminates with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadinessError::InstallFailed { exit_code, .. } if *exit_code != 0 => *exit_code,
            ReadinessError::Interrupted | ReadinessError::Prompt(PromptError::Interrupted) => {
                INTERRUPT_EXIT_CODE
            }
            _ => FAILURE_EXIT_CODE,
        }
    }
}

/// Use case for making an agent binary available.
pub struct EnsureAgentReadyUseCase {
    locator: Arc<dyn BinaryLocator>,
    executor: Arc<dyn ProcessExecutor>,
    prompt: Arc<dyn PromptPort>,
}

impl EnsureAgentReadyUseCase {
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

    /// Return the agent's binary path, installing it through npm if the
    /// user agrees. Declining defaults to "no" and is fatal.
    pub async fn execute(&self, agent: AgentKind) -> Result<PathBuf, ReadinessError> {
        if let Some(path) = self.locator.locate(agent.binary()) {
            debug!(%agent, path = %path.display(), "Agent ready");
            return Ok(path);
        }

        let label = agent.label();
        self.prompt.notice(&format!(
            "{label} CLI n'est pas installée (commande '{}' introuvable).",
            agent.binary()
        ));

        let npm = self
            .locator
            .locate(NPM)
            .ok_or(ReadinessError::NpmUnavailable { agent })?;

        let question = format!(
            "Installer {label} via npm (`npm install -g {}`) maintenant ?",
            agent.npm_package()
        );
        let accepted = self.prompt.is_interactive()
            && confirm(self.prompt.as_ref(), &question, false).await?;
        if !accepted {
            return Err(ReadinessError::Declined { agent });
        }

        self.prompt
            .notice(&format!("Installation de {label} en cours…"));
        let install = CommandLine::new(
            NPM,
            vec![
                "install".to_string(),
                "-g".to_string(),
                agent.npm_package().to_string(),
            ],
        );
        let outcome = self.executor.run(&npm, &install).await;
        match outcome.kind {
            OutcomeKind::Interrupted => return Err(ReadinessError::Interrupted),
            OutcomeKind::LaunchFailed => {
                return Err(ReadinessError::InstallFailed {
                    agent,
                    exit_code: FAILURE_EXIT_CODE,
                });
            }
            OutcomeKind::Completed if outcome.exit_code != 0 => {
                return Err(ReadinessError::InstallFailed {
                    agent,
                    exit_code: outcome.exit_code,
                });
            }
            OutcomeKind::Completed => {}
        }

        self.locator.refresh();
        if let Some(path) = self.locator.locate(agent.binary()) {
            info!(%agent, path = %path.display(), "Agent installed");
            self.prompt
                .notice(&format!("{label} installé avec succès."));
            return Ok(path);
        }

        Err(ReadinessError::StillMissing {
            agent,
            npm_bin_dir: self.npm_global_bin(&npm).await,
        })
    }

    /// Global npm bin directory: `npm bin -g`, or `<npm prefix -g>/bin` on
    /// npm versions that dropped `bin`.
    async fn npm_global_bin(&self, npm: &Path) -> Option<String> {
        if let Some(dir) = self.npm_query(npm, &["bin", "-g"]).await {
            return Some(dir);
        }
        self.npm_query(npm, &["prefix", "-g"])
            .await
            .map(|prefix| Path::new(&prefix).join("bin").display().to_string())
    }

    async fn npm_query(&self, npm: &Path, args: &[&str]) -> Option<String> {
        let command = CommandLine::new(NPM, args.iter().map(|a| a.to_string()).collect());
        let output = self
            .executor
            .capture(npm, &command, NPM_QUERY_TIMEOUT)
            .await
            .ok()?;
        let stdout = output.stdout.trim();
        (output.success() && !stdout.is_empty()).then(|| stdout.to_string())
    }
}
