//! CLI command definitions

use clap::{Arg, ArgAction, Command, CommandFactory, Parser, ValueEnum};
use launcher_application::ExplicitArgs;
use launcher_domain::AgentKind;

/// Agent choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentArg {
    Codex,
    Claude,
}

impl From<AgentArg> for AgentKind {
    fn from(value: AgentArg) -> Self {
        match value {
            AgentArg::Codex => AgentKind::Codex,
            AgentArg::Claude => AgentKind::Claude,
        }
    }
}

/// CLI arguments for agent
#[derive(Parser, Debug)]
#[command(name = "agent")]
#[command(version = "3.0.0")]
#[command(about = "Guided selector for Codex or Claude agents.\nSélecteur guidé pour les agents Codex ou Claude.")]
#[command(long_about = r#"
Guided selector for Codex or Claude agents.
Sélecteur guidé pour les agents Codex ou Claude.

Values are resolved in this order: command-line flags, environment
(AGENT_TYPE, AGENT_BYPASS, AGENT_MODEL), interactive prompts, then the
defaults saved in ~/.config/agent/config.toml.

Launcher flags are recognised anywhere on the line. Any other argument,
and everything after `--`, is passed to the agent unchanged.

Example:
  agent -a claude --add-dir ../shared -- "fix the failing tests"
  agent -a codex "explain this repo" -m o3
  agent -a codex --review
  agent -a claude --loop 90 --review
"#)]
pub struct Cli {
    /// Choose the agent (Codex/Claude). | Choisir l'agent (Codex/Claude).
    #[arg(short, long, value_enum)]
    pub agent: Option<AgentArg>,

    /// Enable dangerous sandbox/approval bypass.
    /// Activer le contournement dangereux des sandbox/approbations.
    #[arg(long, conflicts_with = "no_bypass")]
    pub bypass: bool,

    /// Disable dangerous sandbox/approval bypass.
    /// Désactiver le contournement dangereux des sandbox/approbations.
    #[arg(long)]
    pub no_bypass: bool,

    /// Suppress styling for scripts. | Supprimer le style pour les scripts.
    #[arg(short, long)]
    pub quiet: bool,

    /// Select the target model. | Choisir le modèle.
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Allow an additional directory for the agent (repeatable).
    /// Autoriser un répertoire supplémentaire pour l'agent (option répétable).
    #[arg(long = "add-dir", value_name = "DIR")]
    pub add_dir: Vec<String>,

    /// Show the command that would be executed without running it.
    /// Afficher la commande qui serait exécutée sans la lancer.
    #[arg(long)]
    pub dry_run: bool,

    /// Save current options as defaults for future invocations.
    /// Sauvegarder les options actuelles comme défauts.
    #[arg(long)]
    pub save_defaults: bool,

    /// Check the version of the selected agent.
    /// Vérifier la version de l'agent sélectionné.
    #[arg(long)]
    pub check_version: bool,

    /// Install this launcher into a directory from PATH.
    /// Installer ce lanceur dans un répertoire du PATH.
    #[arg(long)]
    pub install: bool,

    /// Review mode: the other agent reviews and fixes the result.
    /// Mode relecture : l'autre agent relit et corrige le résultat.
    #[arg(long)]
    pub review: bool,

    /// Loop mode: iterate improvements for N minutes (default: 60).
    /// Mode boucle : itérer pendant N minutes (par défaut : 60).
    #[arg(
        long = "loop",
        value_name = "MINUTES",
        num_args = 0..=1,
        default_missing_value = "60",
        allow_negative_numbers = true
    )]
    pub loop_minutes: Option<i64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Arguments passed through to the agent
    #[arg(value_name = "AGENT_ARGS")]
    pub passthrough: Vec<String>,
}

impl Cli {
    /// Parse `std::env::args`, exiting with clap's usage error on failure.
    pub fn parse_mixed() -> Self {
        let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        Self::try_parse_mixed(args).unwrap_or_else(|e| e.exit())
    }

    /// Parse launcher flags wherever they appear.
    ///
    /// Tokens that are not launcher flags, and everything after the first
    /// `--`, become agent arguments in their original order.
    pub fn try_parse_mixed<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| "agent".to_string());

        let mut cmd = Self::command();
        cmd.build();
        let (launcher_args, agent_args) = split_agent_args(&cmd, args);

        let mut cli = Self::try_parse_from(std::iter::once(bin).chain(launcher_args))?;
        cli.passthrough = agent_args;
        Ok(cli)
    }

    /// Bypass as a tri-state: `Some` only when a flag was given.
    pub fn bypass_choice(&self) -> Option<bool> {
        match (self.bypass, self.no_bypass) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// The explicit-argument tier of selection resolution.
    pub fn to_explicit_args(&self) -> ExplicitArgs {
        ExplicitArgs {
            agent: self.agent.map(AgentKind::from),
            bypass: self.bypass_choice(),
            model: self.model.clone(),
            add_dirs: self.add_dir.clone(),
            dry_run: self.dry_run,
            review: self.review,
            loop_minutes: self.loop_minutes,
        }
    }

    /// Arguments for the agent.
    pub fn agent_args(&self) -> Vec<String> {
        self.passthrough.clone()
    }
}

/// How many following tokens a launcher flag consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arity {
    Flag,
    Value,
    /// Consumes the next token only when it is a number (`--loop`).
    OptionalNumber,
}

fn arity_of(arg: &Arg) -> Arity {
    if !arg.get_action().takes_values() {
        return Arity::Flag;
    }
    match arg.get_num_args() {
        Some(range) if range.min_values() == 0 => Arity::OptionalNumber,
        _ => Arity::Value,
    }
}

fn long_arity(cmd: &Command, long: &str) -> Option<Arity> {
    let (name, attached) = match long.split_once('=') {
        Some((name, _)) => (name, true),
        None => (long, false),
    };
    let arg = cmd.get_arguments().find(|arg| arg.get_long() == Some(name))?;
    Some(if attached { Arity::Flag } else { arity_of(arg) })
}

fn short_arity(cmd: &Command, cluster: &str) -> Option<Arity> {
    let mut chars = cluster.chars();
    while let Some(c) = chars.next() {
        let arg = cmd.get_arguments().find(|arg| arg.get_short() == Some(c))?;
        let arity = arity_of(arg);
        if arity != Arity::Flag {
            // The rest of the cluster is the attached value.
            return Some(if chars.as_str().is_empty() { arity } else { Arity::Flag });
        }
    }
    Some(Arity::Flag)
}

fn is_number(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

/// Separate launcher flags (with their values) from agent arguments.
fn split_agent_args(
    cmd: &Command,
    args: impl Iterator<Item = String>,
) -> (Vec<String>, Vec<String>) {
    let mut launcher = Vec::new();
    let mut agent = Vec::new();
    let mut tokens = args.peekable();

    while let Some(token) = tokens.next() {
        if token == "--" {
            agent.extend(tokens.by_ref());
            break;
        }

        let arity = if let Some(long) = token.strip_prefix("--") {
            long_arity(cmd, long)
        } else if let Some(cluster) = token.strip_prefix('-')
            && !cluster.is_empty()
            && !is_number(&token)
        {
            short_arity(cmd, cluster)
        } else {
            None
        };

        let Some(arity) = arity else {
            agent.push(token);
            continue;
        };
        launcher.push(token);
        match arity {
            Arity::Flag => {}
            Arity::Value => launcher.extend(tokens.next()),
            Arity::OptionalNumber => launcher.extend(tokens.next_if(|next| is_number(next))),
        }
    }

    (launcher, agent)
}
