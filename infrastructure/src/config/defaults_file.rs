//! TOML file store for persisted defaults.

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use launcher_application::ports::defaults_store::{DefaultsStore, DefaultsStoreError};
use launcher_domain::PersistedDefaults;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Defaults stored as `config.toml`:
///
/// ```toml
/// default_agent = "claude"
/// default_bypass = false
/// default_model = "sonnet"
/// ```
pub struct TomlDefaultsStore {
    path: PathBuf,
}

impl TomlDefaultsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn extract(path: &Path) -> Result<PersistedDefaults, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(PersistedDefaults::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }
}

impl DefaultsStore for TomlDefaultsStore {
    fn load(&self) -> PersistedDefaults {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No config file");
            return PersistedDefaults::default();
        }
        match Self::extract(&self.path) {
            Ok(defaults) => defaults,
            Err(e) => {
                warn!(
                    "Ignoring unreadable config {}: {}",
                    self.path.display(),
                    e
                );
                PersistedDefaults::default()
            }
        }
    }

    fn save(&self, defaults: &PersistedDefaults) -> Result<PathBuf, DefaultsStoreError> {
        let io_error = |source| DefaultsStoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = toml::to_string_pretty(defaults)
            .map_err(|e| DefaultsStoreError::Serialize(e.to_string()))?;

        // Write next to the target and rename so a crash never leaves a
        // half-written config behind.
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, content).map_err(io_error)?;
        std::fs::rename(&tmp, &self.path).map_err(io_error)?;

        debug!(path = %self.path.display(), "Defaults saved");
        Ok(self.path.clone())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
