//! Exclusion patterns for the reference tree.
//! Paths matching any pattern are left out of the generated template,
//! similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles exclusion patterns into a set for path matching.
///
/// # Arguments
/// * `patterns` - Glob patterns matched against paths relative to the source root
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns, empty if no pattern is given
///
/// # Example
/// ```ignore
/// let excludes = build_exclude_set(&["**/__pycache__".into(), ".venv".into()])?;
/// ```
pub fn build_exclude_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        debug!("Excluding paths matching '{pattern}'");
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::ExcludePatternError(format!("'{pattern}' is not a valid glob: {e}"))
        })?);
    }
    builder.build().map_err(|e| Error::ExcludePatternError(e.to_string()))
}
