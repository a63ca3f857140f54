//! Optional generator defaults read from `golosus.config.json`.
//!
//! ```json
//! { "author": "octocat", "output_dir": "/home/octocat/src" }
//! ```
//!
//! Both fields are optional. Values given on the command line win over the file.
//! The file is only ever read.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GolosusError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "golosus.config.json";

/// Defaults for `golosus new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Author identifier used when none is passed.
    #[serde(default)]
    pub author: Option<String>,
    /// Directory in which project roots are created.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load a config file, failing if it is missing or malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| GolosusError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| GolosusError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a config file if present; a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "author": "octocat", "output_dir": "projects" }"#).unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.author.as_deref(), Some("octocat"));
        assert_eq!(config.output_dir, Some(PathBuf::from("projects")));
    }

    #[test]
    fn test_load_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(GeneratorConfig::load(&path).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        assert!(matches!(
            GeneratorConfig::load(&path),
            Err(GolosusError::ConfigNotFound { .. })
        ));
        assert_eq!(
            GeneratorConfig::load_or_default(&path).unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_malformed_and_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        std::fs::write(&path, "{ author: ").unwrap();
        assert!(matches!(
            GeneratorConfig::load_or_default(&path),
            Err(GolosusError::ConfigParse { .. })
        ));

        std::fs::write(&path, r#"{ "auther": "typo" }"#).unwrap();
        assert!(matches!(
            GeneratorConfig::load(&path),
            Err(GolosusError::ConfigParse { .. })
        ));
    }
}
