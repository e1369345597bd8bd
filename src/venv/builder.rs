//! Venv creation via the interpreter's own `venv` module.

use crate::error::{BingoError, Result};
use crate::python::Verbosity;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Builder for creating (or reusing) a venv directory.
pub struct VenvBuilder {
    venv_dir: PathBuf,
    python: PathBuf,
    verbosity: Verbosity,
}

impl VenvBuilder {
    /// Create a new venv builder.
    pub fn new(venv_dir: PathBuf, python: PathBuf) -> Self {
        Self {
            venv_dir,
            python,
            verbosity: 0,
        }
    }

    /// Set the verbosity level.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Whether the venv directory already exists.
    pub fn exists(&self) -> bool {
        self.venv_dir.exists()
    }

    /// Create the environment.
    ///
    /// Runs `python -m venv <dir>` unconditionally; over an existing
    /// directory this reuses it and repairs any missing pieces, so reruns
    /// are safe.
    pub fn create(&self) -> Result<Venv> {
        if self.verbosity >= 1 {
            eprintln!(
                "[bingokit] Executing: {} -m venv {}",
                self.python.display(),
                self.venv_dir.display()
            );
        }

        let status = Command::new(&self.python)
            .args(["-m", "venv"])
            .arg(&self.venv_dir)
            .status()?;

        if !status.success() {
            return Err(BingoError::PythonCommandFailed(format!(
                "venv creation at {} (exit code: {:?})",
                self.venv_dir.display(),
                status.code()
            )));
        }

        Ok(Venv::new(self.venv_dir.clone(), self.verbosity))
    }

    /// Get the venv directory.
    pub fn venv_dir(&self) -> &Path {
        &self.venv_dir
    }
}

/// A created environment.
pub struct Venv {
    root: PathBuf,
    verbosity: Verbosity,
}

impl Venv {
    /// Wrap an existing venv directory.
    pub fn new(root: PathBuf, verbosity: Verbosity) -> Self {
        Self { root, verbosity }
    }

    /// The venv's own interpreter.
    #[cfg(unix)]
    pub fn python(&self) -> PathBuf {
        self.root.join("bin").join("python")
    }

    #[cfg(windows)]
    pub fn python(&self) -> PathBuf {
        self.root.join("Scripts").join("python.exe")
    }

    /// The activation script sourced by the launcher.
    #[cfg(unix)]
    pub fn activate_script(&self) -> PathBuf {
        self.root.join("bin").join("activate")
    }

    #[cfg(windows)]
    pub fn activate_script(&self) -> PathBuf {
        self.root.join("Scripts").join("activate")
    }

    /// Run pip inside the environment, streaming output to the terminal.
    pub fn pip(&self, args: &[&str]) -> Result<()> {
        let python = self.python();

        if self.verbosity >= 1 {
            eprintln!(
                "[bingokit] Executing: {} -m pip {}",
                python.display(),
                args.join(" ")
            );
        }

        let status = Command::new(&python)
            .args(["-m", "pip"])
            .args(args)
            .status()?;

        if !status.success() {
            return Err(BingoError::PythonCommandFailed(format!(
                "pip {} (exit code: {:?})",
                args.join(" "),
                status.code()
            )));
        }

        Ok(())
    }

    /// Upgrade pip itself.
    pub fn upgrade_pip(&self) -> Result<()> {
        self.pip(&["install", "--upgrade", "pip"])
    }

    /// Install packages into the environment.
    pub fn install(&self, packages: &[&str]) -> Result<()> {
        let mut args = vec!["install"];
        args.extend_from_slice(packages);
        self.pip(&args)
    }

    /// Get the venv root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
