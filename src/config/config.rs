use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;

use crate::error::{ConfigError, ConfigResult};
use crate::tree::avltree::Duplicates;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keys: Vec<i64>,
    pub duplicates: Duplicates,
    pub print_steps: bool,
    pub log_level: String,
}

impl Config {
    pub fn new() -> Self {
        Config {
            keys: vec![10, 8, 12, 7, 3, 6],
            duplicates: Duplicates::Right,
            print_steps: true,
            log_level: "info".to_string(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    pub fn level(&self) -> ConfigResult<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// Parses TOML; any field left out keeps its value from [`Config::new`].
impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
