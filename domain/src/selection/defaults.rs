//! Persisted defaults: the lowest-priority tier of selection resolution.

use crate::agent::kind::AgentKind;
use crate::selection::entities::Selection;
use serde::{Deserialize, Serialize};

/// Durable fallback values for agent, bypass and model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_agent: Option<AgentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_bypass: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

impl PersistedDefaults {
    /// Capture the values of a resolved selection for `--save-defaults`.
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            default_agent: Some(selection.agent()),
            default_bypass: Some(selection.bypass()),
            default_model: selection.model().map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.default_agent.is_none() && self.default_bypass.is_none() && self.default_model.is_none()
    }
}
