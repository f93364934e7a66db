//! Destination paths carrying the template marker.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_SUFFIX;

/// A destination path together with its template marker.
///
/// The marker only ever goes from unset to set. A marked path materializes
/// with the template suffix appended after its existing extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedPath {
    path: PathBuf,
    is_template: bool,
}

impl TrackedPath {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into(), is_template: false }
    }

    pub fn mark_as_template(&mut self) {
        self.is_template = true;
    }

    pub fn is_template(&self) -> bool {
        self.is_template
    }

    /// The path before the template suffix is applied.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path written to disk.
    pub fn materialized(&self) -> PathBuf {
        if !self.is_template {
            return self.path.clone();
        }
        let Some(file_name) = self.path.file_name() else {
            return self.path.clone();
        };

        let suffix = format!(".{TEMPLATE_SUFFIX}");
        if file_name.to_str().is_some_and(|name| name.ends_with(&suffix)) {
            return self.path.clone();
        }

        let mut name = file_name.to_os_string();
        name.push(&suffix);
        self.path.with_file_name(name)
    }
}

impl fmt::Display for TrackedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.materialized().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmarked_path_is_unchanged() {
        let path = TrackedPath::new("template/src/main.py");
        assert_eq!(path.materialized(), PathBuf::from("template/src/main.py"));
    }

    #[test]
    fn test_marker_appended_after_extension() {
        let mut path = TrackedPath::new("template/src/main.py");
        path.mark_as_template();
        assert!(path.is_template());
        assert_eq!(path.materialized(), PathBuf::from("template/src/main.py.jinja"));
        assert_eq!(path.to_string(), "template/src/main.py.jinja");
    }

    #[test]
    fn test_marker_for_names_without_extension() {
        let mut path = TrackedPath::new("template/Makefile");
        path.mark_as_template();
        assert_eq!(path.materialized(), PathBuf::from("template/Makefile.jinja"));
    }

    #[test]
    fn test_marker_not_doubled() {
        let mut path = TrackedPath::new("template/README.md.jinja");
        path.mark_as_template();
        path.mark_as_template();
        assert_eq!(path.materialized(), PathBuf::from("template/README.md.jinja"));
    }
}
