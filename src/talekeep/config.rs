use crate::error::{Result, TalekeepError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_COMPLETION_THRESHOLD: f64 = 95.0;
const DEFAULT_CATALOG_FILE: &str = "stories.json";

/// Configuration for talekeep, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TalekeepConfig {
    /// Progress percentage at which a story counts as completed.
    /// The exact number is policy, not business logic — but it is a single
    /// constant, configured here rather than hard-coded at call sites.
    #[serde(default = "default_completion_threshold")]
    pub completion_threshold: f64,

    /// Catalog document to read stories from (e.g. "stories.json")
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
}

fn default_completion_threshold() -> f64 {
    DEFAULT_COMPLETION_THRESHOLD
}

fn default_catalog_file() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

impl Default for TalekeepConfig {
    fn default() -> Self {
        Self {
            completion_threshold: DEFAULT_COMPLETION_THRESHOLD,
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
        }
    }
}

impl TalekeepConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TalekeepError::Io)?;
        let config: TalekeepConfig =
            serde_json::from_str(&content).map_err(TalekeepError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TalekeepError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TalekeepError::Serialization)?;
        fs::write(config_path, content).map_err(TalekeepError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "completion-threshold" => Some(self.completion_threshold.to_string()),
            "catalog-file" => Some(self.catalog_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "completion-threshold" => {
                let parsed: f64 = value
                    .parse()
                    .map_err(|_| format!("Invalid threshold: {}", value))?;
                // Out-of-range thresholds clamp like every other percent input
                self.completion_threshold = parsed.clamp(0.0, 100.0);
                Ok(())
            }
            "catalog-file" => {
                self.catalog_file = value.to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
