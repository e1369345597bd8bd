//! `bingokit doctor` command implementation.
//!
//! Diagnostics-only contract: every failure path prints remediation text and
//! the process still exits 0. The only probe is "does `import tkinter` exit
//! zero in a subprocess".

use crate::error::Result;
use crate::homebrew::{self, Homebrew};
use crate::python::{PythonExecutor, Verbosity};
use crate::GAME_PACKAGES;

/// Arguments for the doctor command.
pub struct DoctorArgs {
    /// Interpreter to check (resolved best-effort by the caller)
    pub python: std::path::PathBuf,
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Execute the doctor command.
pub fn execute(args: DoctorArgs) -> Result<()> {
    println!("Music Bingo dependency check");
    println!("============================");
    println!();

    let python = PythonExecutor::new(args.python, args.verbosity);

    println!("Checking Tk bindings ({})...", python.executable().display());
    let mut tk_ok = python.probe_module("tkinter");

    if !tk_ok {
        println!("tkinter is not importable.");
        println!();
        remediate_tk(&python, args.verbosity);

        println!();
        println!("Re-checking Tk bindings...");
        tk_ok = python.probe_module("tkinter");
    }

    if tk_ok {
        println!("Tk bindings OK.");
        println!();
        println!("Installing game libraries ({})...", GAME_PACKAGES.join(", "));
        if let Err(e) = python.pip_install(GAME_PACKAGES) {
            println!("warning: game library install failed: {}", e);
        }
        println!();
        println!("All set! Start the game with:");
        println!("  python3 music_bingo.py");
    } else {
        println!("tkinter is still not importable. Two things to try:");
        println!("  1. Reinstall Python from the official installer:");
        println!("       https://www.python.org/downloads/");
        println!("  2. Run the game with the Homebrew interpreter directly:");
        println!("       /usr/local/bin/python3 music_bingo.py");
    }

    Ok(())
}

/// Attempt to install the Tk bindings.
///
/// Automated remediation only exists for Homebrew; everywhere else this
/// prints manual instructions. Each brew step is best-effort: a failure is
/// reported and the flow continues to the re-probe.
fn remediate_tk(python: &PythonExecutor, verbosity: Verbosity) {
    let Some(brew_path) = homebrew::find_brew() else {
        print_manual_instructions();
        return;
    };

    let brew = Homebrew::new(brew_path, verbosity);

    println!("Installing Tk bindings via Homebrew...");
    if let Err(e) = brew.install("python-tk") {
        println!("warning: brew install python-tk failed: {}", e);
    }

    match python.feature_version() {
        Some(version) => {
            if let Err(e) = brew.install(&format!("python-tk@{}", version)) {
                println!("warning: brew install python-tk@{} failed: {}", version, e);
            }
            // Reinstalling the interpreter relinks it against the new Tk
            if let Err(e) = brew.reinstall(&format!("python@{}", version)) {
                println!("warning: brew reinstall python@{} failed: {}", version, e);
            }
        }
        None => {
            println!("warning: could not determine the interpreter version;");
            println!("         skipping the versioned python-tk formula.");
        }
    }
}

#[cfg(target_os = "macos")]
fn print_manual_instructions() {
    println!("Homebrew not found, so the Tk bindings cannot be installed");
    println!("automatically. Either:");
    println!("  - install Homebrew from https://brew.sh and rerun `bingokit doctor`, or");
    println!("  - install the python-tk package by hand.");
}

#[cfg(not(target_os = "macos"))]
fn print_manual_instructions() {
    println!("Automatic Tk remediation is only supported via Homebrew, which");
    println!("was not found on this system. Install the Tk bindings with your");
    println!("platform's package manager (for example, on Debian/Ubuntu:");
    println!("  sudo apt install python3-tk");
    println!(") and rerun `bingokit doctor`.");
}
