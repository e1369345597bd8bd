//! Error types for bingokit.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bingokit operations.
pub type Result<T> = std::result::Result<T, BingoError>;

/// Errors that can occur during bingokit operations.
#[derive(Error, Debug)]
pub enum BingoError {
    #[error("No Python interpreter found. Install Python 3 or specify one with --python")]
    PythonNotFound,

    #[error("Python command failed: {0}")]
    PythonCommandFailed(String),

    #[error("Homebrew command failed: {0}")]
    BrewCommandFailed(String),

    #[error("Music folder does not exist: {0}")]
    MusicFolderMissing(PathBuf),

    #[error("Patch target not found: {0}")]
    PatchTargetMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
