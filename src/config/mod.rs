use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::paths::{app_data_dir, config_file_in, ensure_dir};
use crate::errors::LedgerError;
use crate::utils::persistence;

const DEFAULT_COUNTDOWN_SECONDS: u64 = 15;

/// Persisted shell preferences and session bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data file override; the default path applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_session_records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<DateTime<Utc>>,
}

fn default_countdown_seconds() -> u64 {
    DEFAULT_COUNTDOWN_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            last_session_records: None,
            last_saved: None,
        }
    }
}

impl Config {
    /// Stamps the session bookkeeping fields at teardown.
    pub fn record_session(&mut self, records: usize) {
        self.last_session_records = Some(records);
        self.last_saved = Some(Utc::now());
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::from_base(app_data_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        persistence::replace_file(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
