//! Configuration file handling for bingokit.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The configuration file name.
pub const CONFIG_FILE_NAME: &str = "bingokit.toml";

/// Configuration from bingokit.toml.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Path to the Python interpreter
    pub python_path: Option<PathBuf>,

    /// Folder holding the MP3 library used by `bingokit library`
    pub music_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from bingokit.toml in the given directory or its parents.
    ///
    /// Returns `Ok(None)` if no configuration file is found.
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir
            .canonicalize()
            .unwrap_or_else(|_| start_dir.to_path_buf());

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                let config: Self = toml::from_str(&content)?;
                return Ok(Some(config));
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Load configuration from the current directory.
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}
