use crate::output::OutputFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "snekargs.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub name: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub quiet: Option<bool>,
    #[serde(default)]
    pub help: HelpConfig,
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default, rename = "argument")]
    pub arguments: Vec<ArgumentConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HelpConfig {
    pub right_margin: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ParseConfig {
    pub all_matches: Option<bool>,
    pub strict: Option<bool>,
}

/// One `[[argument]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArgumentConfig {
    pub short: char,
    pub long: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start.to_path_buf()
    };

    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?.to_path_buf();
    }
}
