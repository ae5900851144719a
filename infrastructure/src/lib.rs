//! Infrastructure layer for agent-launcher
//!
//! Adapters that implement the ports defined in the application layer:
//! process execution, binary lookup, the defaults file, the launch history,
//! plus the file-system side of self-install.

pub mod config;
pub mod install;
pub mod logging;
pub mod paths;
pub mod process;

// Re-export commonly used types
pub use config::TomlDefaultsStore;
pub use install::{InstallError, InstallMethod, InstallOutcome, install, install_directory};
pub use logging::JsonlHistoryLog;
pub use paths::{LauncherPaths, is_root};
pub use process::{SearchPathLocator, TokioProcessExecutor};
