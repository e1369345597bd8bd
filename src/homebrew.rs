//! Homebrew detection and invocation.
//!
//! Homebrew is the only package manager the Tk remediation path automates.
//! On platforms without it, `doctor` reports manual instructions instead.

use crate::error::{BingoError, Result};
use crate::python::Verbosity;
use std::path::PathBuf;
use std::process::Command;

/// Returns default Homebrew installation paths.
fn default_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/opt/homebrew/bin/brew"),
        PathBuf::from("/usr/local/bin/brew"),
        PathBuf::from("/home/linuxbrew/.linuxbrew/bin/brew"),
    ]
}

/// Attempt to find the `brew` executable.
///
/// Detection order:
/// 1. PATH search (via `which`)
/// 2. Default installation prefixes
pub fn find_brew() -> Option<PathBuf> {
    if let Ok(path) = which::which("brew") {
        return Some(path);
    }

    default_paths().into_iter().find(|path| path.exists())
}

/// Wrapper for executing Homebrew commands.
pub struct Homebrew {
    executable: PathBuf,
    verbosity: Verbosity,
}

impl Homebrew {
    /// Create a new wrapper for the given `brew` executable path.
    pub fn new(executable: PathBuf, verbosity: Verbosity) -> Self {
        Self {
            executable,
            verbosity,
        }
    }

    /// `brew install <formula>`.
    pub fn install(&self, formula: &str) -> Result<()> {
        self.run("install", formula)
    }

    /// `brew reinstall <formula>`.
    pub fn reinstall(&self, formula: &str) -> Result<()> {
        self.run("reinstall", formula)
    }

    /// Run a brew subcommand, streaming output to the terminal.
    fn run(&self, subcommand: &str, formula: &str) -> Result<()> {
        if self.verbosity >= 1 {
            eprintln!(
                "[bingokit] Executing: {} {} {}",
                self.executable.display(),
                subcommand,
                formula
            );
        }

        let status = Command::new(&self.executable)
            .args([subcommand, formula])
            .status()?;

        if !status.success() {
            return Err(BingoError::BrewCommandFailed(format!(
                "{} {} (exit code: {:?})",
                subcommand,
                formula,
                status.code()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_not_empty() {
        assert!(!default_paths().is_empty());
    }

    #[test]
    fn test_homebrew_new() {
        let brew = Homebrew::new(PathBuf::from("/opt/homebrew/bin/brew"), 1);
        assert_eq!(brew.verbosity, 1);
    }
}
