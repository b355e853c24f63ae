use crate::core::events::EventLog;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod token;

/// Upper bound accepted for `list_max`; one reply must stay a readable message.
pub const LIST_MAX_CEILING: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_events_path")]
    pub events_path: String,
    #[serde(default = "default_list_default")]
    pub list_default: usize,
    #[serde(default = "default_list_max")]
    pub list_max: usize,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,
}

fn default_events_path() -> String {
    "dbs/events".to_string()
}
fn default_list_default() -> usize {
    10
}
fn default_list_max() -> usize {
    50
}
fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}
fn default_poll_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_path: default_events_path(),
            list_default: default_list_default(),
            list_max: default_list_max(),
            api_url: default_api_url(),
            poll_timeout_secs: default_poll_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pearlkite")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pearlkite.conf")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.events_path.trim().is_empty() {
            return Err(AppError::Config("events_path must not be empty".into()));
        }
        if self.list_max == 0 || self.list_max > LIST_MAX_CEILING {
            return Err(AppError::Config(format!(
                "list_max must be between 1 and {}",
                LIST_MAX_CEILING
            )));
        }
        Ok(())
    }

    /// The event log this configuration points at.
    pub fn event_log(&self) -> EventLog {
        EventLog::new(expand_tilde(&self.events_path))
    }

    /// Write this configuration as YAML to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
