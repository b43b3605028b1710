use crate::error::{DocwatchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_FILE: &str = "documentos.json";
const DEFAULT_LEAD_DAYS: u32 = 30;

/// Configuration for docwatch, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocwatchConfig {
    /// Store file name, relative to the data directory unless absolute
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Lead time used by `add` when none is given
    #[serde(default = "default_lead_days")]
    pub default_lead_days: u32,
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_lead_days() -> u32 {
    DEFAULT_LEAD_DAYS
}

impl Default for DocwatchConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            default_lead_days: DEFAULT_LEAD_DAYS,
        }
    }
}

impl DocwatchConfig {
    pub const KEYS: [&'static str; 2] = ["store-file", "default-lead-days"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocwatchError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| DocwatchError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DocwatchError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DocwatchError::Serialization)?;
        fs::write(config_path, content).map_err(DocwatchError::Io)?;
        Ok(())
    }

    /// Where the store lives for a given data directory.
    pub fn store_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        let file = Path::new(&self.store_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.as_ref().join(file)
        }
    }

    /// Every key with its current value, in [`Self::KEYS`] order.
    pub fn entries(&self) -> [(&'static str, String); 2] {
        [
            (Self::KEYS[0], self.store_file.clone()),
            (Self::KEYS[1], self.default_lead_days.to_string()),
        ]
    }

    pub fn lookup(&self, key: &str) -> Result<String> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
            .ok_or_else(|| DocwatchError::Config(format!("Unknown config key: {}", key)))
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "store-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(DocwatchError::Config("store-file cannot be empty".into()));
                }
                self.store_file = value.to_string();
            }
            "default-lead-days" => {
                self.default_lead_days = value.trim().parse().map_err(|_| {
                    DocwatchError::Config(format!(
                        "default-lead-days must be a non-negative integer, got {}",
                        value
                    ))
                })?;
            }
            other => {
                return Err(DocwatchError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
