//! Binary discovery port.

use std::path::PathBuf;

/// Resolves executable names to paths.
///
/// Implementations may memoise lookups for the duration of a run;
/// [`BinaryLocator::refresh`] drops the memo after something was installed.
pub trait BinaryLocator: Send + Sync {
    fn locate(&self, binary: &str) -> Option<PathBuf>;

    fn refresh(&self);
}
