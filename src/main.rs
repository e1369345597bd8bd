//! Bingokit CLI entry point.

use bingokit::commands::{clean, doctor, info, library, patch, setup};
use bingokit::config::Config;
use bingokit::error::{BingoError, Result};
use bingokit::python::find_python;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bingokit")]
#[command(about = "Music Bingo Setup & Maintenance CLI")]
#[command(version)]
#[command(author)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the Python interpreter (overrides auto-detection)
    #[arg(long, global = true, env = "BINGO_PYTHON")]
    python: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Check the game's dependencies and repair the Tk bindings
    Doctor,

    /// Create the isolated environment and the launcher script
    Setup {
        /// Project directory (where music_bingo.py lives)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show Python environment info
    Info {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Scan the music library and report game coverage
    Library {
        /// Music folder (default: music_dir from bingokit.toml, else "music")
        folder: Option<PathBuf>,

        /// List every song found
        #[arg(short, long)]
        list: bool,
    },

    /// Apply the display window fixes to the game source
    Patch {
        /// Game source file
        #[arg(default_value = "music_bingo.py")]
        file: PathBuf,
    },

    /// Remove generated artifacts
    Clean {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Also remove the environment and the launcher
        #[arg(long)]
        all: bool,

        /// Show what would be deleted without actually deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for info::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => info::OutputFormat::Text,
            OutputFormat::Json => info::OutputFormat::Json,
        }
    }
}

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbose;

    // Load optional config
    let config = Config::load_from_cwd()?.unwrap_or_default();

    // Explicit interpreter (CLI > env > config); detection is the fallback
    let explicit_python = cli.python.clone().or_else(|| config.python_path.clone());

    // Strict resolution: the bootstrapper's fatal precondition
    let python_strict = || -> Result<PathBuf> {
        if let Some(ref path) = explicit_python {
            if !path.exists() {
                return Err(BingoError::PythonCommandFailed(format!(
                    "Python not found at specified path: {}",
                    path.display()
                )));
            }
            return Ok(path.clone());
        }
        find_python().ok_or(BingoError::PythonNotFound)
    };

    // Lenient resolution: doctor probes whatever it can get; a bad path
    // simply reads as a failed probe
    let python_lenient = || -> PathBuf {
        explicit_python
            .clone()
            .or_else(find_python)
            .unwrap_or_else(|| PathBuf::from("python3"))
    };

    match cli.command {
        Command::Doctor => doctor::execute(doctor::DoctorArgs {
            python: python_lenient(),
            verbosity,
        }),

        Command::Setup { path } => setup::execute(setup::SetupArgs {
            path,
            python: python_strict()?,
            verbosity,
        }),

        Command::Info { format } => info::execute(info::InfoArgs {
            format: format.into(),
            python: python_strict()?,
            verbosity,
        }),

        Command::Library { folder, list } => library::execute(library::LibraryArgs {
            folder: folder
                .or_else(|| config.music_dir.clone())
                .unwrap_or_else(|| PathBuf::from("music")),
            list,
        }),

        Command::Patch { file } => patch::execute(patch::PatchArgs { file }),

        Command::Clean { path, all, dry_run } => {
            clean::execute(clean::CleanArgs { path, all, dry_run })
        }

        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "bingokit", &mut io::stdout());
            Ok(())
        }
    }
}
