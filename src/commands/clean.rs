//! `bingokit clean` command implementation.

use crate::error::Result;
use crate::launcher::LAUNCHER_FILE_NAME;
use crate::venv::VENV_DIR_NAME;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the clean command.
pub struct CleanArgs {
    /// Project directory
    pub path: PathBuf,
    /// Also remove the environment and the launcher
    pub all: bool,
    /// Only show what would be deleted
    pub dry_run: bool,
}

/// Execute the clean command.
pub fn execute(args: CleanArgs) -> Result<()> {
    let project_root = args.path.canonicalize().unwrap_or(args.path.clone());

    if args.dry_run {
        println!("Dry run: showing what would be deleted...");
    } else {
        println!("Cleaning...");
    }
    println!();

    let mut deleted_count = 0;

    // Clean __pycache__ directories recursively
    deleted_count += clean_pycache(&project_root, args.dry_run)?;

    // Clean the environment and the launcher if --all is specified
    if args.all {
        let venv_path = project_root.join(VENV_DIR_NAME);
        if venv_path.exists() {
            deleted_count += clean_path(&venv_path, args.dry_run)?;
        }

        let launcher_path = project_root.join(LAUNCHER_FILE_NAME);
        if launcher_path.exists() {
            deleted_count += clean_path(&launcher_path, args.dry_run)?;
        }
    }

    println!();
    if args.dry_run {
        if deleted_count == 0 {
            println!("Nothing to clean.");
        } else {
            println!(
                "Would delete {} item(s). Run without --dry-run to actually delete.",
                deleted_count
            );
        }
    } else if deleted_count == 0 {
        println!("Nothing to clean.");
    } else {
        println!("Cleaned {} item(s).", deleted_count);
    }

    Ok(())
}

/// Clean a single path (file or directory).
fn clean_path(path: &Path, dry_run: bool) -> Result<usize> {
    if dry_run {
        println!("  Would delete: {}", path.display());
    } else {
        println!("  Deleting: {}", path.display());
        if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
    }
    Ok(1)
}

/// Recursively clean __pycache__ directories.
fn clean_pycache(dir: &Path, dry_run: bool) -> Result<usize> {
    let mut count = 0;

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();

            if path.is_dir() {
                let name = entry.file_name();
                if name == "__pycache__" {
                    count += clean_path(&path, dry_run)?;
                } else if name != VENV_DIR_NAME && name != ".git" {
                    // Recurse into subdirectories (skip the venv and .git)
                    count += clean_pycache(&path, dry_run)?;
                }
            }
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_empty_project() {
        let temp_dir = TempDir::new().unwrap();

        let result = execute(CleanArgs {
            path: temp_dir.path().to_path_buf(),
            all: false,
            dry_run: true,
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_clean_removes_pycache() {
        let temp_dir = TempDir::new().unwrap();
        let pycache = temp_dir.path().join("__pycache__");
        fs::create_dir(&pycache).unwrap();
        fs::write(pycache.join("music_bingo.cpython-312.pyc"), "x").unwrap();

        // Dry run should not delete
        let result = execute(CleanArgs {
            path: temp_dir.path().to_path_buf(),
            all: false,
            dry_run: true,
        });
        assert!(result.is_ok());
        assert!(pycache.exists());

        // Actual clean should delete
        let result = execute(CleanArgs {
            path: temp_dir.path().to_path_buf(),
            all: false,
            dry_run: false,
        });
        assert!(result.is_ok());
        assert!(!pycache.exists());
    }

    #[test]
    fn test_clean_preserves_venv_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let venv_dir = temp_dir.path().join(VENV_DIR_NAME);
        fs::create_dir(&venv_dir).unwrap();
        // A __pycache__ inside the venv must survive a default clean too
        fs::create_dir(venv_dir.join("__pycache__")).unwrap();

        let result = execute(CleanArgs {
            path: temp_dir.path().to_path_buf(),
            all: false,
            dry_run: false,
        });
        assert!(result.is_ok());
        assert!(venv_dir.exists());
        assert!(venv_dir.join("__pycache__").exists());
    }

    #[test]
    fn test_clean_all_removes_venv_and_launcher() {
        let temp_dir = TempDir::new().unwrap();
        let venv_dir = temp_dir.path().join(VENV_DIR_NAME);
        fs::create_dir(&venv_dir).unwrap();
        let launcher = temp_dir.path().join(LAUNCHER_FILE_NAME);
        fs::write(&launcher, "#!/bin/bash\n").unwrap();

        let result = execute(CleanArgs {
            path: temp_dir.path().to_path_buf(),
            all: true,
            dry_run: false,
        });
        assert!(result.is_ok());
        assert!(!venv_dir.exists());
        assert!(!launcher.exists());
    }
}
