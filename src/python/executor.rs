//! Python subprocess execution.

use crate::error::{BingoError, Result};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Verbosity levels for output.
/// - 0: quiet (errors only)
/// - 1: normal (-v, show commands)
/// - 2: verbose (-vv, show commands + output)
pub type Verbosity = u8;

/// Python snippet that reports the interpreter environment as JSON.
const INFO_SNIPPET: &str = r#"
import sys
import json
info = {
    "executable": sys.executable,
    "version": sys.version,
    "prefix": sys.prefix,
}
try:
    import tkinter
    info["tkinter"] = True
except Exception:
    info["tkinter"] = False
try:
    import pygame
    info["pygame"] = pygame.version.ver
except Exception:
    info["pygame"] = None
try:
    import mutagen
    info["mutagen"] = mutagen.version_string
except Exception:
    info["mutagen"] = None
print("BINGOKIT_JSON_START")
print(json.dumps(info))
print("BINGOKIT_JSON_END")
"#;

/// Wrapper for executing commands against a Python interpreter.
pub struct PythonExecutor {
    executable: PathBuf,
    verbosity: Verbosity,
}

impl PythonExecutor {
    /// Create a new executor for the given interpreter path.
    pub fn new(executable: PathBuf, verbosity: Verbosity) -> Self {
        Self {
            executable,
            verbosity,
        }
    }

    /// Get the path to the interpreter.
    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    /// Run an inline code snippet (`python -c <code>`), capturing output.
    pub fn run_code(&self, code: &str) -> Result<Output> {
        self.log_execution(&format!("{} -c '{}'", self.executable.display(), code));

        let output = Command::new(&self.executable)
            .args(["-c", code])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        self.log_output(&output);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BingoError::PythonCommandFailed(format!(
                "exit code: {:?}\nstderr: {}",
                output.status.code(),
                stderr
            )));
        }

        Ok(output)
    }

    /// Capability check: can the interpreter import the given module?
    ///
    /// Classified purely by the subprocess exit status. A spawn error (for
    /// example, the interpreter itself is missing) also reads as `false`.
    pub fn probe_module(&self, module: &str) -> bool {
        let code = format!("import {}", module);
        self.log_execution(&format!("{} -c '{}'", self.executable.display(), code));

        Command::new(&self.executable)
            .args(["-c", &code])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// The interpreter's feature version, e.g. "3.12".
    ///
    /// This is the suffix Homebrew uses for its versioned formulas
    /// (`python-tk@3.12`, `python@3.12`).
    pub fn feature_version(&self) -> Option<String> {
        let code = "import sys; print(f\"{sys.version_info.major}.{sys.version_info.minor}\")";
        let output = self.run_code(code).ok()?;
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            None
        } else {
            Some(version)
        }
    }

    /// Run pip in this interpreter (`python -m pip <args>`), streaming output
    /// to the terminal so install progress stays visible.
    pub fn pip(&self, args: &[&str]) -> Result<()> {
        self.log_execution(&format!(
            "{} -m pip {}",
            self.executable.display(),
            args.join(" ")
        ));

        let status = Command::new(&self.executable)
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

    /// Install packages with pip.
    pub fn pip_install(&self, packages: &[&str]) -> Result<()> {
        let mut args = vec!["install"];
        args.extend_from_slice(packages);
        self.pip(&args)
    }

    /// Query the interpreter environment.
    pub fn python_info(&self) -> Result<PythonInfo> {
        let output = self.run_code(INFO_SNIPPET)?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        // Extract JSON from output
        let start_marker = "BINGOKIT_JSON_START";
        let end_marker = "BINGOKIT_JSON_END";

        let start = stdout
            .find(start_marker)
            .ok_or_else(|| BingoError::PythonCommandFailed("JSON output not found".into()))?;
        let end = stdout
            .find(end_marker)
            .ok_or_else(|| BingoError::PythonCommandFailed("JSON output not found".into()))?;

        let json_str = stdout[start + start_marker.len()..end].trim();
        let info: PythonInfo = serde_json::from_str(json_str)?;

        Ok(info)
    }

    fn log_execution(&self, msg: &str) {
        // Level 1+: show commands being executed
        if self.verbosity >= 1 {
            eprintln!("[bingokit] Executing: {}", msg);
        }
    }

    fn log_output(&self, output: &Output) {
        // Level 2+: show command output
        if self.verbosity >= 2 {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stdout.is_empty() {
                eprintln!("[bingokit] stdout:\n{}", stdout);
            }
            if !stderr.is_empty() {
                eprintln!("[bingokit] stderr:\n{}", stderr);
            }
        }
    }
}

/// Python environment information.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct PythonInfo {
    pub executable: String,
    pub version: String,
    pub prefix: String,
    /// Whether the Tk bindings import cleanly.
    pub tkinter: bool,
    /// Installed pygame version, if any.
    pub pygame: Option<String>,
    /// Installed mutagen version, if any.
    pub mutagen: Option<String>,
}
