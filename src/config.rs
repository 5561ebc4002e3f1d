//! Configuration
//!
//! Session settings, loadable from TOML. Every field has a default, so an
//! empty file (or no file) yields the stock machine.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::fs::FsLimits;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// All fixed bounds of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellLimits {
    #[serde(flatten)]
    pub fs: FsLimits,
    /// Longest input line accepted by the prompt
    pub max_line_len: usize,
    /// Longest command token; the rest of an overlong token becomes the argument
    pub max_command_len: usize,
}

impl Default for ShellLimits {
    fn default() -> Self {
        Self {
            fs: FsLimits::default(),
            max_line_len: 255,
            max_command_len: 31,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub limits: ShellLimits,
    /// Prompt prefix
    pub hostname: String,
    /// Pause after the boot log, in milliseconds
    pub boot_delay_ms: u64,
    pub show_boot_log: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            limits: ShellLimits::default(),
            hostname: "minios".to_string(),
            boot_delay_ms: 0,
            show_boot_log: true,
        }
    }
}

impl ShellConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
