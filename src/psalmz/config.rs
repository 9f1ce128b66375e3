use crate::error::{PsalmzError, Result};
use crate::model::OrderPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE: &str = "Psalms.txt";
const DEFAULT_LABEL: &str = "psalm";
const DEFAULT_TITLE: &str = "Psalm Lookup";

/// Keys accepted by [`PsalmzConfig::get`] and [`PsalmzConfig::set`].
pub const KEYS: [&str; 4] = ["file", "label", "title", "sort-unsorted"];

/// Configuration for psalmz, stored as `config.json` in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PsalmzConfig {
    /// Book file to load when no `--file` is given
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Singular noun for one record, used in prompts and messages
    #[serde(default = "default_label")]
    pub label: String,

    /// Caption for prompts and messages
    #[serde(default = "default_title")]
    pub title: String,

    /// Sort out-of-order books instead of rejecting them
    #[serde(default)]
    pub sort_unsorted: bool,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for PsalmzConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            label: default_label(),
            title: default_title(),
            sort_unsorted: false,
        }
    }
}

impl PsalmzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PsalmzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn order_policy(&self) -> OrderPolicy {
        if self.sort_unsorted {
            OrderPolicy::Sort
        } else {
            OrderPolicy::Reject
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "file" => Some(self.file.display().to_string()),
            "label" => Some(self.label.clone()),
            "title" => Some(self.title.clone()),
            "sort-unsorted" => Some(self.sort_unsorted.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file" => self.file = PathBuf::from(value),
            "label" => {
                if value.trim().is_empty() {
                    return Err(PsalmzError::Config("label cannot be empty".into()));
                }
                self.label = value.trim().to_lowercase();
            }
            "title" => self.title = value.to_string(),
            "sort-unsorted" => {
                self.sort_unsorted = value.parse().map_err(|_| {
                    PsalmzError::Config(format!(
                        "sort-unsorted expects true or false, got {}",
                        value
                    ))
                })?
            }
            other => return Err(PsalmzError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsalmzConfig::default();
        assert_eq!(config.file, PathBuf::from("Psalms.txt"));
        assert_eq!(config.label, "psalm");
        assert_eq!(config.order_policy(), OrderPolicy::Reject);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = PsalmzConfig::load(dir.path()).unwrap();
        assert_eq!(config, PsalmzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("psalmz");

        let mut config = PsalmzConfig::default();
        config.set("file", "/srv/books/proverbs.txt").unwrap();
        config.set("label", "Proverb").unwrap();
        config.set("sort-unsorted", "true").unwrap();
        config.save(&nested).unwrap();

        let loaded = PsalmzConfig::load(&nested).unwrap();
        assert_eq!(loaded.file, PathBuf::from("/srv/books/proverbs.txt"));
        assert_eq!(loaded.label, "proverb");
        assert_eq!(loaded.order_policy(), OrderPolicy::Sort);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"title": "Verses"}"#).unwrap();

        let config = PsalmzConfig::load(dir.path()).unwrap();
        assert_eq!(config.title, "Verses");
        assert_eq!(config.label, "psalm");
        assert!(!config.sort_unsorted);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        let err = PsalmzConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, PsalmzError::Serialization(_)));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PsalmzConfig::default();
        assert!(config.set("sort-unsorted", "maybe").is_err());
        assert!(config.set("label", "  ").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, PsalmzConfig::default());
    }

    #[test]
    fn test_get_every_key() {
        let config = PsalmzConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(config.get("nope"), None);
    }
}
