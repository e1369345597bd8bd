//! `bingokit setup` command implementation.
//!
//! The one fatal precondition (no interpreter) is enforced by the caller
//! before this runs; every step here is best-effort and the command always
//! ends with a summary of what, if anything, is left to do by hand.

use crate::error::Result;
use crate::launcher;
use crate::python::Verbosity;
use crate::venv::{VenvBuilder, VENV_DIR_NAME};
use crate::GAME_PACKAGES;
use std::path::PathBuf;

/// Arguments for the setup command.
pub struct SetupArgs {
    /// Project directory
    pub path: PathBuf,
    /// Interpreter used to create the environment
    pub python: PathBuf,
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Execute the setup command.
pub fn execute(args: SetupArgs) -> Result<()> {
    let project_dir = args.path.canonicalize().unwrap_or(args.path.clone());

    println!("Setting up the Music Bingo environment...");
    println!();

    let mut leftovers: Vec<&str> = Vec::new();

    // Create or reuse the environment
    let venv_dir = project_dir.join(VENV_DIR_NAME);
    let builder = VenvBuilder::new(venv_dir.clone(), args.python).verbosity(args.verbosity);

    if builder.exists() {
        println!("Reusing environment at {}...", venv_dir.display());
    } else {
        println!("Creating environment at {}...", venv_dir.display());
    }

    let venv = match builder.create() {
        Ok(venv) => Some(venv),
        Err(e) => {
            println!("warning: environment creation failed: {}", e);
            leftovers.push("create the environment: python3 -m venv venv");
            None
        }
    };

    // Install into the environment via its own interpreter
    if let Some(ref venv) = venv {
        println!("Upgrading pip...");
        if let Err(e) = venv.upgrade_pip() {
            println!("warning: pip upgrade failed: {}", e);
            leftovers.push("upgrade pip: venv/bin/pip install --upgrade pip");
        }

        println!("Installing game libraries ({})...", GAME_PACKAGES.join(", "));
        if let Err(e) = venv.install(GAME_PACKAGES) {
            println!("warning: game library install failed: {}", e);
            leftovers.push("install the libraries: venv/bin/pip install pygame mutagen");
        }
    }

    // Emit the launcher
    println!("Writing launcher...");
    match launcher::write_launcher(&project_dir) {
        Ok(path) => println!("  Created {}", path.display()),
        Err(e) => {
            println!("warning: could not write the launcher: {}", e);
            leftovers.push("create run_bingo.sh by hand");
        }
    }

    println!();
    if leftovers.is_empty() {
        println!("Setup complete!");
        println!();
        println!("Start the game with:");
        println!("  ./{}", launcher::LAUNCHER_FILE_NAME);
        println!();
        println!("or activate the environment manually:");
        println!("  source {}/bin/activate", VENV_DIR_NAME);
        println!("  python {}", crate::GAME_SCRIPT);
    } else {
        println!("Setup finished with problems. Still to do by hand:");
        for step in &leftovers {
            println!("  - {}", step);
        }
    }

    Ok(())
}
