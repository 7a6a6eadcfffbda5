use crate::error::{LibraryError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "library.json";
const DEFAULT_TOP_ISSUED: usize = 5;

/// Configuration for librarian, stored in `config.json` in the user's config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Where the catalog lives. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// How many books the report lists as most issued.
    #[serde(default = "default_top_issued")]
    pub top_issued: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_top_issued() -> usize {
    DEFAULT_TOP_ISSUED
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            top_issued: default_top_issued(),
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibraryError::Persistence)?;
        let config: LibraryConfig =
            serde_json::from_str(&content).map_err(LibraryError::Serialization)?;
        Ok(config)
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }
}

/// The per-user config directory, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "librarian", "librarian").map(|d| d.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibraryConfig::default();
        assert_eq!(config.data_file, PathBuf::from("library.json"));
        assert_eq!(config.top_issued, 5);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = LibraryConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{ "top_issued": 3 }"#).unwrap();

        let config = LibraryConfig::load(dir.path()).unwrap();
        assert_eq!(config.top_issued, 3);
        assert_eq!(config.data_file, PathBuf::from("library.json"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "top_issued = 3").unwrap();
        assert!(LibraryConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_data_file_override() {
        let config = LibraryConfig::default().with_data_file("/tmp/books.json");
        assert_eq!(config.data_file, PathBuf::from("/tmp/books.json"));
    }
}
