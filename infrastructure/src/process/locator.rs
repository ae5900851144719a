//! Search-path binary locator.

use crate::paths::LauncherPaths;
use launcher_application::ports::binary_locator::BinaryLocator;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Finds executables on `$PATH` extended with the launcher's own directory
/// and the user's bin directories. Lookups are memoised until [`refresh`].
///
/// [`refresh`]: BinaryLocator::refresh
pub struct SearchPathLocator {
    search_path: OsString,
    memo: Mutex<HashMap<String, Option<PathBuf>>>,
}

impl SearchPathLocator {
    /// Search exactly `dirs`, in order.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        let search_path = std::env::join_paths(dirs).unwrap_or_default();
        debug!(search_path = ?search_path, "Binary search path");
        Self {
            search_path,
            memo: Mutex::new(HashMap::new()),
        }
    }

    /// `$PATH`, then the launcher executable's directory, then the user's
    /// bin directories.
    pub fn from_environment(paths: &LauncherPaths) -> Self {
        let mut dirs: Vec<PathBuf> = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.canonicalize().ok())
            .and_then(|exe| exe.parent().map(PathBuf::from))
        {
            dirs.push(exe_dir);
        }
        dirs.extend(paths.user_bin_dirs());
        Self::new(dedup_dirs(dirs))
    }

    fn lookup(&self, binary: &str) -> Option<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(binary, Some(&self.search_path), cwd).ok()
    }
}

impl BinaryLocator for SearchPathLocator {
    fn locate(&self, binary: &str) -> Option<PathBuf> {
        let Ok(mut memo) = self.memo.lock() else {
            return self.lookup(binary);
        };
        memo.entry(binary.to_string())
            .or_insert_with(|| {
                let found = self.lookup(binary);
                debug!(binary, ?found, "Binary lookup");
                found
            })
            .clone()
    }

    fn refresh(&self) {
        if let Ok(mut memo) = self.memo.lock() {
            memo.clear();
        }
    }
}

/// Drop empty entries and duplicates, keeping the first occurrence.
fn dedup_dirs(dirs: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut unique: Vec<PathBuf> = Vec::with_capacity(dirs.len());
    for dir in dirs {
        if !dir.as_os_str().is_empty() && !unique.contains(&dir) {
            unique.push(dir);
        }
    }
    unique
}
