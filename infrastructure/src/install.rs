//! Self-install of the launcher into a directory on `$PATH`.

use launcher_application::EnvOverrides;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the installed launcher.
pub const INSTALLED_NAME: &str = "agent";

const ROOT_INSTALL_DIR: &str = "/usr/local/bin";

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Impossible de déterminer le dossier personnel / Cannot determine the home directory")]
    NoHomeDirectory,

    #[error("Impossible de créer {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Impossible de remplacer {path}: {source}")]
    Replace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Impossible de copier le lanceur vers {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How the launcher ended up in the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod {
    Symlink,
    Copy,
    AlreadyInstalled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub target: PathBuf,
    pub method: InstallMethod,
    /// Whether the target directory is listed on `$PATH`.
    pub on_path: bool,
}

impl InstallOutcome {
    pub fn target_dir(&self) -> &Path {
        self.target.parent().unwrap_or(Path::new("."))
    }
}

/// Pick the install directory: `AGENT_INSTALL_DIR`, then `XDG_BIN_HOME`,
/// then `/usr/local/bin` for root, then `~/.local/bin`.
pub fn install_directory(
    env: &EnvOverrides,
    home: Option<&Path>,
    is_root: bool,
) -> Result<PathBuf, InstallError> {
    if let Some(dir) = env.install_dir.as_deref().or(env.xdg_bin_home.as_deref()) {
        return Ok(expand_home(dir, home));
    }
    if is_root {
        return Ok(PathBuf::from(ROOT_INSTALL_DIR));
    }
    home.map(|home| home.join(".local/bin"))
        .ok_or(InstallError::NoHomeDirectory)
}

/// Install `source` as `<target_dir>/agent`.
///
/// An existing entry that already resolves to `source` is left alone. Any
/// other entry is replaced by a symlink, or by a `0755` copy when symlinking
/// fails.
pub fn install(
    source: &Path,
    target_dir: &Path,
    path_var: Option<&OsStr>,
) -> Result<InstallOutcome, InstallError> {
    std::fs::create_dir_all(target_dir).map_err(|source| InstallError::CreateDir {
        path: target_dir.to_path_buf(),
        source,
    })?;

    let target = target_dir.join(INSTALLED_NAME);
    let on_path = is_on_path(target_dir, path_var);
    let source = source.canonicalize().unwrap_or_else(|_| source.to_path_buf());

    // symlink_metadata also sees dangling links.
    if target.symlink_metadata().is_ok() {
        if target.canonicalize().ok().as_deref() == Some(source.as_path()) {
            debug!(target = %target.display(), "Launcher already installed");
            return Ok(InstallOutcome {
                target,
                method: InstallMethod::AlreadyInstalled,
                on_path,
            });
        }
        std::fs::remove_file(&target).map_err(|source| InstallError::Replace {
            path: target.clone(),
            source,
        })?;
    }

    let method = match symlink(&source, &target) {
        Ok(()) => InstallMethod::Symlink,
        Err(e) => {
            debug!("Symlink failed ({}), copying instead", e);
            copy_executable(&source, &target)?;
            InstallMethod::Copy
        }
    };

    info!(target = %target.display(), ?method, "Launcher installed");
    Ok(InstallOutcome {
        target,
        method,
        on_path,
    })
}

fn is_on_path(dir: &Path, path_var: Option<&OsStr>) -> bool {
    path_var
        .map(|path| std::env::split_paths(path).any(|entry| entry == dir))
        .unwrap_or(false)
}

fn expand_home(dir: &Path, home: Option<&Path>) -> PathBuf {
    match (dir.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => dir.to_path_buf(),
    }
}

#[cfg(unix)]
fn symlink(source: &Path, target: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(source, target)
}

#[cfg(not(unix))]
fn symlink(_source: &Path, _target: &Path) -> std::io::Result<()> {
    Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
}

fn copy_executable(source: &Path, target: &Path) -> Result<(), InstallError> {
    let copy_error = |source| InstallError::Copy {
        path: target.to_path_buf(),
        source,
    };
    std::fs::copy(source, target).map_err(copy_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(target, std::fs::Permissions::from_mode(0o755))
            .map_err(copy_error)?;
    }
    Ok(())
}
