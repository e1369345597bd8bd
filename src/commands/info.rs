//! `bingokit info` command implementation.

use crate::error::Result;
use crate::python::{PythonExecutor, Verbosity};
use std::path::PathBuf;

/// Output format for environment info.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the info command.
pub struct InfoArgs {
    pub format: OutputFormat,
    pub python: PathBuf,
    pub verbosity: Verbosity,
}

/// Execute the info command.
pub fn execute(args: InfoArgs) -> Result<()> {
    let executor = PythonExecutor::new(args.python, args.verbosity);

    println!("Querying the Python environment...");
    let info = executor.python_info()?;

    match args.format {
        OutputFormat::Text => {
            println!();
            println!("Music Bingo Python Environment");
            println!("==============================");
            println!();
            println!("Executable: {}", info.executable);
            println!(
                "Version:    {}",
                info.version.lines().next().unwrap_or(&info.version)
            );
            println!("Prefix:     {}", info.prefix);
            println!();
            println!("tkinter:    {}", if info.tkinter { "ok" } else { "MISSING" });
            println!(
                "pygame:     {}",
                info.pygame.as_deref().unwrap_or("not installed")
            );
            println!(
                "mutagen:    {}",
                info.mutagen.as_deref().unwrap_or("not installed")
            );

            if !info.tkinter {
                println!();
                println!("Run `bingokit doctor` to repair the Tk bindings.");
            } else if info.pygame.is_none() || info.mutagen.is_none() {
                println!();
                println!("Run `bingokit setup` to install the game libraries.");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&info)?;
            println!("{}", json);
        }
    }

    Ok(())
}
