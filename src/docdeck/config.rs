use crate::error::Result;
use crate::nav::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for docdeck, stored as config.json in the user config dir.
///
/// Only the preferred example language is persisted. Navigation state
/// (active section, scroll position) is session-only and never written out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocdeckConfig {
    /// Language applied to example blocks at startup (e.g. "python").
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for DocdeckConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl DocdeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DocdeckConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Set the startup language (normalized to lowercase to match catalog
    /// keys). Whether the key exists in the catalog is checked by the
    /// command layer, which knows the catalog.
    pub fn set_language(&mut self, language: &str) {
        self.language = language.to_lowercase();
    }
}
