//! `bingokit library` command implementation.
//!
//! Scans the MP3 library and reports whether it can cover complete games.
//! Tag inspection stays in the game's own tooling; this command only looks
//! at the files on disk.

use crate::error::{BingoError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Songs consumed by one game.
pub const SONGS_PER_GAME: usize = 50;

/// Arguments for the library command.
pub struct LibraryArgs {
    /// Music folder to scan
    pub folder: PathBuf,
    /// List every song found
    pub list: bool,
}

/// Execute the library command.
pub fn execute(args: LibraryArgs) -> Result<()> {
    if !args.folder.exists() {
        return Err(BingoError::MusicFolderMissing(args.folder));
    }

    println!("Scanning {}...", args.folder.display());

    let mut songs = collect_mp3s(&args.folder)?;
    songs.sort();

    println!();
    println!("Total MP3 files found: {}", songs.len());

    if songs.len() < SONGS_PER_GAME {
        println!();
        println!(
            "Warning: you need at least {} songs for a game.",
            SONGS_PER_GAME
        );
        println!("Currently you have {} songs.", songs.len());
        println!("Please add {} more songs.", SONGS_PER_GAME - songs.len());
    } else {
        let complete_games = songs.len() / SONGS_PER_GAME;
        let remaining = songs.len() % SONGS_PER_GAME;

        println!();
        println!(
            "You have enough songs for {} complete game(s). (Each game uses {} songs.)",
            complete_games, SONGS_PER_GAME
        );
        if remaining > 0 {
            println!(
                "Plus {} extra songs; add {} more for another complete game.",
                remaining,
                SONGS_PER_GAME - remaining
            );
        }

        println!();
        println!("Optimal library sizes for {}-song games:", SONGS_PER_GAME);
        println!("  50 songs  = 1 game (minimum)");
        println!("  100 songs = 2 different games");
        println!("  150 songs = 3 different games");
        println!("  200+ songs = 4+ games with good variety");
    }

    if args.list && !songs.is_empty() {
        println!();
        println!("=== Songs ({} total) ===", songs.len());
        for (i, song) in songs.iter().enumerate() {
            let marker = if i < SONGS_PER_GAME { "*" } else { "+" };
            let stem = song
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| song.display().to_string());
            println!("{} {:3}. {}", marker, i + 1, stem);
        }
        if songs.len() > SONGS_PER_GAME {
            println!();
            println!("* = in the first game pool (1-{})", SONGS_PER_GAME);
            println!("+ = additional songs for variety");
        }
    }

    Ok(())
}

/// Recursively collect `.mp3` files (case-insensitive extension).
fn collect_mp3s(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_into(dir, &mut found)?;
    Ok(found)
}

fn collect_into(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_into(&path, found)?;
        } else if path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("mp3"))
            .unwrap_or(false)
        {
            found.push(path);
        }
    }
    Ok(())
}
