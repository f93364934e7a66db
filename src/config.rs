//! Build configuration for the template converter.
//! Holds the ordered placeholder list and the destination root.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::variable::{default_variables, Variable};

#[derive(Debug, Clone)]
pub struct BuildConfig {
    variables: Vec<Variable>,
    template_directory: PathBuf,
}

impl BuildConfig {
    /// Creates a configuration with the default placeholders.
    ///
    /// # Arguments
    /// * `template_directory` - Root the template tree is written under
    ///
    /// # Errors
    /// * `Error::ValidationError` if a default placeholder fails validation
    pub fn new<P: AsRef<Path>>(template_directory: P) -> Result<Self> {
        Ok(Self::with_variables(default_variables()?, template_directory))
    }

    /// Creates a configuration with an explicit placeholder list.
    pub fn with_variables<P: AsRef<Path>>(variables: Vec<Variable>, template_directory: P) -> Self {
        Self { variables, template_directory: template_directory.as_ref().to_path_buf() }
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn template_directory(&self) -> &Path {
        &self.template_directory
    }

    /// Builds the ordered mapping from placeholder text to template marker.
    ///
    /// Entries keep the declaration order of the variables. A repeated
    /// placeholder keeps its first position and takes the last marker.
    pub fn substitution_map(&self) -> IndexMap<String, String> {
        self.variables
            .iter()
            .map(|variable| (variable.text().to_string(), variable.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution_map_keeps_declaration_order() {
        let config = BuildConfig::new("template").unwrap();
        let map = config.substitution_map();

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys[0], "PackageName");
        assert_eq!(keys[5], "my-github-org");
        assert_eq!(map["your.name@example.com"], "{{ package_author_email }}");
        assert_eq!(config.template_directory(), Path::new("template"));
    }

    #[test]
    fn test_repeated_placeholder_keeps_first_position() {
        let variables = vec![
            Variable::new("a", "first", &[]).unwrap(),
            Variable::new("b", "second", &[]).unwrap(),
            Variable::new("a", "third", &[]).unwrap(),
        ];
        let map = BuildConfig::with_variables(variables, "out").substitution_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_index(0), Some((&"a".to_string(), &"{{ third }}".to_string())));
    }
}
