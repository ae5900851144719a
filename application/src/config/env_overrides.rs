//! Environment overrides: the second resolution tier.
//!
//! Variables are read through a lookup closure so that resolution can be
//! tested without touching the process environment.

use launcher_domain::AgentKind;
use launcher_domain::interaction::is_truthy;
use std::path::PathBuf;
use tracing::warn;

pub const AGENT_TYPE_VAR: &str = "AGENT_TYPE";
pub const AGENT_BYPASS_VAR: &str = "AGENT_BYPASS";
pub const AGENT_MODEL_VAR: &str = "AGENT_MODEL";
pub const AGENT_INSTALL_DIR_VAR: &str = "AGENT_INSTALL_DIR";
pub const XDG_BIN_HOME_VAR: &str = "XDG_BIN_HOME";

/// Launcher settings taken from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `AGENT_TYPE`; unknown names are ignored.
    pub agent: Option<AgentKind>,
    /// `AGENT_BYPASS`, truthy parsing.
    pub bypass: Option<bool>,
    /// `AGENT_MODEL`.
    pub model: Option<String>,
    /// `AGENT_INSTALL_DIR`.
    pub install_dir: Option<PathBuf>,
    /// `XDG_BIN_HOME`.
    pub xdg_bin_home: Option<PathBuf>,
}

impl EnvOverrides {
    /// Read the overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the overrides through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let agent = get(AGENT_TYPE_VAR).and_then(|value| match value.parse::<AgentKind>() {
            Ok(agent) => Some(agent),
            Err(e) => {
                warn!("Ignoring {}: {}", AGENT_TYPE_VAR, e);
                None
            }
        });

        Self {
            agent,
            bypass: get(AGENT_BYPASS_VAR).map(|value| is_truthy(&value)),
            model: get(AGENT_MODEL_VAR),
            install_dir: get(AGENT_INSTALL_DIR_VAR).map(PathBuf::from),
            xdg_bin_home: get(XDG_BIN_HOME_VAR).map(PathBuf::from),
        }
    }
}
