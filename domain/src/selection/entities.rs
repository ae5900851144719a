//! Selection entity: one fully-resolved run request.
//!
//! A [`Selection`] is built once (by the resolver) and is read-only afterwards.
//! Execution modes that need a variant, such as the review step, derive a
//! fresh value with [`Selection::for_review`] instead of mutating the original.

use super::value_objects::LoopDuration;
use crate::agent::kind::AgentKind;
use std::path::{Path, PathBuf};

/// A fully-resolved run request (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    agent: AgentKind,
    bypass: bool,
    model: Option<String>,
    add_dirs: Vec<PathBuf>,
    dry_run: bool,
    review_mode: bool,
    loop_duration: Option<LoopDuration>,
}

impl Selection {
    /// Start a selection for `agent` with every optional field unset.
    pub fn new(agent: AgentKind) -> Self {
        Self {
            agent,
            bypass: false,
            model: None,
            add_dirs: Vec::new(),
            dry_run: false,
            review_mode: false,
            loop_duration: None,
        }
    }

    pub fn with_bypass(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }

    /// Set the model; blank values are treated as "no model".
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model.filter(|m| !m.trim().is_empty());
        self
    }

    /// Set the extra directories. Callers pass already-validated paths.
    pub fn with_add_dirs(mut self, add_dirs: Vec<PathBuf>) -> Self {
        self.add_dirs = add_dirs;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_review_mode(mut self, review_mode: bool) -> Self {
        self.review_mode = review_mode;
        self
    }

    pub fn with_loop_duration(mut self, loop_duration: Option<LoopDuration>) -> Self {
        self.loop_duration = loop_duration;
        self
    }

    /// Derive the selection used for a review step: the other agent, with the
    /// same bypass/model/directories and every mode flag cleared so a review
    /// can never start a nested review or loop.
    pub fn for_review(&self) -> Selection {
        Selection {
            agent: self.agent.other(),
            bypass: self.bypass,
            model: self.model.clone(),
            add_dirs: self.add_dirs.clone(),
            dry_run: false,
            review_mode: false,
            loop_duration: None,
        }
    }

    pub fn agent(&self) -> AgentKind {
        self.agent
    }

    pub fn bypass(&self) -> bool {
        self.bypass
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn add_dirs(&self) -> &[PathBuf] {
        &self.add_dirs
    }

    /// Extra directories as display strings, in order.
    pub fn add_dir_strings(&self) -> Vec<String> {
        self.add_dirs
            .iter()
            .map(|dir| path_to_string(dir))
            .collect()
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn review_mode(&self) -> bool {
        self.review_mode
    }

    pub fn loop_duration(&self) -> Option<LoopDuration> {
        self.loop_duration
    }
}

pub(crate) fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
