//! Explicit arguments: the highest-priority resolution tier.

use launcher_domain::AgentKind;

/// Values given on the command line.
///
/// Every field is "unset" by default; the resolver only consults lower tiers
/// for fields left unset here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitArgs {
    pub agent: Option<AgentKind>,
    /// Tri-state: `--bypass`, `--no-bypass` or neither.
    pub bypass: Option<bool>,
    pub model: Option<String>,
    /// Raw `--add-dir` values, validated by the resolver.
    pub add_dirs: Vec<String>,
    pub dry_run: bool,
    pub review: bool,
    /// Raw `--loop` value; non-positive values are normalized.
    pub loop_minutes: Option<i64>,
}

impl ExplicitArgs {
    // ==================== Builder Methods ====================

    pub fn with_agent(mut self, agent: AgentKind) -> Self {
        self.agent = Some(agent);
        self
    }

    pub fn with_bypass(mut self, bypass: bool) -> Self {
        self.bypass = Some(bypass);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_add_dir(mut self, dir: impl Into<String>) -> Self {
        self.add_dirs.push(dir.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_review(mut self, review: bool) -> Self {
        self.review = review;
        self
    }

    pub fn with_loop_minutes(mut self, minutes: i64) -> Self {
        self.loop_minutes = Some(minutes);
        self
    }
}
