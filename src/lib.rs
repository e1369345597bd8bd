//! Bingokit - Music Bingo Setup & Maintenance CLI
//!
//! A tool to set up and maintain the runtime environment for the Music Bingo
//! desktop application (`music_bingo.py`).

pub mod commands;
pub mod config;
pub mod error;
pub mod homebrew;
pub mod launcher;
pub mod python;
pub mod venv;

pub use config::Config;
pub use error::{BingoError, Result};

/// Third-party libraries the game imports at runtime.
pub const GAME_PACKAGES: &[&str] = &["pygame", "mutagen"];

/// Entry point script of the game itself. Not shipped by this crate.
pub const GAME_SCRIPT: &str = "music_bingo.py";
