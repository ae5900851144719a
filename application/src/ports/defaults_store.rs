//! Persisted defaults port.

use launcher_domain::PersistedDefaults;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefaultsStoreError {
    #[error("Could not save config to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize config: {0}")]
    Serialize(String),
}

/// Storage for [`PersistedDefaults`].
pub trait DefaultsStore: Send + Sync {
    /// Load the stored defaults. Missing or corrupt data yields empty defaults.
    fn load(&self) -> PersistedDefaults;

    /// Overwrite the stored defaults, returning the file written.
    fn save(&self, defaults: &PersistedDefaults) -> Result<PathBuf, DefaultsStoreError>;

    fn location(&self) -> PathBuf;
}
