//! Launcher file locations.
//!
//! When the launcher runs under `sudo`, configuration, history and binary
//! lookups follow the invoking user's home rather than root's.

use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".config/agent";
const CONFIG_FILE: &str = "config.toml";
const HISTORY_FILE: &str = "history.log";

/// Home directories relevant to one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherPaths {
    /// Home of the current user.
    home: Option<PathBuf>,
    /// Home of `$SUDO_USER`, when running under sudo.
    sudo_home: Option<PathBuf>,
}

impl LauncherPaths {
    /// Detect the homes from the process environment.
    pub fn detect() -> Self {
        let sudo_home = std::env::var("SUDO_USER")
            .ok()
            .filter(|user| !user.is_empty())
            .and_then(|user| passwd_home(&user));
        let paths = Self::new(dirs::home_dir(), sudo_home);
        debug!(?paths, "Launcher paths detected");
        paths
    }

    pub fn new(home: Option<PathBuf>, sudo_home: Option<PathBuf>) -> Self {
        Self { home, sudo_home }
    }

    /// The sudo invoker's home if any, otherwise the current user's home.
    pub fn effective_home(&self) -> Option<&Path> {
        self.sudo_home.as_deref().or(self.home.as_deref())
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn sudo_home(&self) -> Option<&Path> {
        self.sudo_home.as_deref()
    }

    /// `<effective home>/.config/agent`, or a relative fallback without a home.
    pub fn config_dir(&self) -> PathBuf {
        self.effective_home()
            .map(|home| home.join(CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR))
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }

    pub fn history_file(&self) -> PathBuf {
        self.config_dir().join(HISTORY_FILE)
    }

    /// `~/.local/bin` and `~/bin` of the effective home, then of the current
    /// user's home when it differs (running under sudo).
    pub fn user_bin_dirs(&self) -> Vec<PathBuf> {
        let mut homes: Vec<&Path> = self.effective_home().into_iter().collect();
        if let Some(home) = self.home()
            && Some(home) != self.effective_home()
        {
            homes.push(home);
        }
        homes
            .into_iter()
            .flat_map(|home| [home.join(".local/bin"), home.join("bin")])
            .collect()
    }
}

/// Look up a user's home directory in the passwd database.
#[cfg(unix)]
fn passwd_home(user: &str) -> Option<PathBuf> {
    use std::ffi::{CStr, CString, OsStr};
    use std::os::unix::ffi::OsStrExt;

    let name = CString::new(user).ok()?;
    // SAFETY: getpwnam returns null or a pointer into static storage that
    // stays valid until the next passwd call; pw_dir is copied out here.
    unsafe {
        let entry = libc::getpwnam(name.as_ptr());
        if entry.is_null() || (*entry).pw_dir.is_null() {
            return None;
        }
        let dir = CStr::from_ptr((*entry).pw_dir);
        Some(PathBuf::from(OsStr::from_bytes(dir.to_bytes())))
    }
}

#[cfg(not(unix))]
fn passwd_home(_user: &str) -> Option<PathBuf> {
    None
}

/// Whether the launcher runs with root privileges.
#[cfg(unix)]
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_root() -> bool {
    false
}
