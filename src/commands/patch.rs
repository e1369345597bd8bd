//! `bingokit patch` command implementation.
//!
//! Applies the known display-window fixes to `music_bingo.py` by exact text
//! replacement, after writing a backup of the original. A fix whose source
//! text is not found (already patched, or the game diverged) is skipped with
//! a warning rather than guessed at.

use crate::error::{BingoError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One find/replace fix against the game source.
struct Fix {
    name: &'static str,
    old: &'static str,
    new: &'static str,
}

const SCHEDULE_OLD: &str = r#"    def schedule_display_update(self):
        """Schedule display update when current song finishes"""
        def check_song_finished():
            if not pygame.mixer.music.get_busy():
                # Song finished, update display
                if self.display_window and self.display_window.winfo_exists():
                    # Show last 10 played songs (not including currently playing)
                    if len(self.played_songs) > 0:
                        # Remove current song from display list
                        display_songs = self.played_songs[:-1] if self.is_playing else self.played_songs
                        self.display_window.update_songs(display_songs)
            else:
                # Check again in 1 second
                self.root.after(1000, check_song_finished)
        
        self.root.after(1000, check_song_finished)"#;

const SCHEDULE_NEW: &str = r#"    def schedule_display_update(self):
        """Schedule display update when current song finishes"""
        def check_song_finished():
            if not pygame.mixer.music.get_busy():
                # Song finished, mark it as no longer playing
                self.is_playing = False
                # Update display with all played songs (song has finished)
                if self.display_window and self.display_window.winfo_exists():
                    self.display_window.update_songs(self.played_songs)
            else:
                # Check again in 1 second
                self.root.after(1000, check_song_finished)
        
        self.root.after(1000, check_song_finished)"#;

const MONITOR_OLD: &str = r#"    def monitor_progress(self):
        """Monitor song playback progress"""
        if self.is_playing and pygame.mixer.music.get_busy():
            # Update progress bar
            if self.current_song:
                pos = pygame.mixer.music.get_pos() / 1000.0  # Convert to seconds
                duration = self.current_song['duration']
                if duration > 0:
                    progress = (pos / duration) * 100
                    self.progress_var.set(min(progress, 100))
            
            # Schedule next check
            self.root.after(100, self.monitor_progress)
        else:
            self.progress_var.set(0)
            if self.is_playing and not pygame.mixer.music.get_busy():
                # Song ended, update display
                self.is_playing = False
                if self.display_window and self.display_window.winfo_exists():
                    self.display_window.update_songs(self.played_songs)"#;

const MONITOR_NEW: &str = r#"    def monitor_progress(self):
        """Monitor song playback progress"""
        if self.is_playing and pygame.mixer.music.get_busy():
            # Update progress bar
            if self.current_song:
                pos = pygame.mixer.music.get_pos() / 1000.0  # Convert to seconds
                duration = self.current_song['duration']
                if duration > 0:
                    progress = (pos / duration) * 100
                    self.progress_var.set(min(progress, 100))
            
            # Schedule next check
            self.root.after(100, self.monitor_progress)
        else:
            self.progress_var.set(0)"#;

const PLAY_OLD: &str = r#"        # Update display window
        if self.display_window and self.display_window.winfo_exists():
            # Don't show current song, only update after it's done
            self.schedule_display_update()"#;

const PLAY_NEW: &str = r#"        # Update display window - show all played songs including current
        if self.display_window and self.display_window.winfo_exists():
            self.display_window.update_songs(self.played_songs)"#;

/// The known display-window fixes, applied in order.
const FIXES: &[Fix] = &[
    Fix {
        name: "simplify schedule_display_update()",
        old: SCHEDULE_OLD,
        new: SCHEDULE_NEW,
    },
    Fix {
        name: "drop duplicate update in monitor_progress()",
        old: MONITOR_OLD,
        new: MONITOR_NEW,
    },
    Fix {
        name: "refresh display immediately in play_next_song()",
        old: PLAY_OLD,
        new: PLAY_NEW,
    },
];

/// Result of a patch run.
pub struct PatchReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub backup: PathBuf,
}

/// Arguments for the patch command.
pub struct PatchArgs {
    /// Game source file to patch
    pub file: PathBuf,
}

/// Execute the patch command.
pub fn execute(args: PatchArgs) -> Result<()> {
    println!("Music Bingo display window patcher");
    println!("==================================");
    println!("Target file: {}", args.file.display());
    println!();

    let report = apply_fixes(&args.file)?;

    println!("Created backup: {}", report.backup.display());
    for name in &report.applied {
        println!("Applied fix: {}", name);
    }
    for name in &report.skipped {
        println!("warning: no match for \"{}\"; skipped", name);
    }

    println!();
    if report.skipped.is_empty() && !report.applied.is_empty() {
        println!("All fixes applied. The display window now shows played songs");
        println!("immediately, including the one currently playing.");
    } else if report.applied.is_empty() {
        println!("Nothing to patch (already patched, or the source has diverged).");
    } else {
        println!(
            "Applied {} fix(es), skipped {}.",
            report.applied.len(),
            report.skipped.len()
        );
    }

    Ok(())
}

/// Back up the target, then apply every fix whose source text is present.
pub fn apply_fixes(target: &Path) -> Result<PatchReport> {
    if !target.exists() {
        return Err(BingoError::PatchTargetMissing(target.to_path_buf()));
    }

    let mut content = fs::read_to_string(target)?;

    // Backup before touching anything
    let backup = backup_path(target);
    fs::write(&backup, &content)?;

    let mut applied = Vec::new();
    let mut skipped = Vec::new();

    for fix in FIXES {
        if content.contains(fix.old) {
            content = content.replace(fix.old, fix.new);
            applied.push(fix.name);
        } else {
            skipped.push(fix.name);
        }
    }

    fs::write(target, content)?;

    Ok(PatchReport {
        applied,
        skipped,
        backup,
    })
}

/// `music_bingo.py` -> `music_bingo.py.backup`, next to the target.
fn backup_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    name.push_str(".backup");
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A plausible stand-in for the unpatched game source.
    fn pristine_source() -> String {
        format!(
            "import pygame\n\nclass MusicBingo:\n{}\n\n{}\n\n    def play_next_song(self):\n{}\n",
            SCHEDULE_OLD, MONITOR_OLD, PLAY_OLD
        )
    }

    #[test]
    fn test_apply_fixes_on_pristine_source() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("music_bingo.py");
        fs::write(&target, pristine_source()).unwrap();

        let report = apply_fixes(&target).unwrap();

        assert_eq!(report.applied.len(), 3);
        assert!(report.skipped.is_empty());

        let patched = fs::read_to_string(&target).unwrap();
        assert!(patched.contains(SCHEDULE_NEW));
        assert!(patched.contains(MONITOR_NEW));
        assert!(patched.contains(PLAY_NEW));
        assert!(!patched.contains(PLAY_OLD));
    }

    #[test]
    fn test_apply_fixes_writes_backup() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("music_bingo.py");
        let original = pristine_source();
        fs::write(&target, &original).unwrap();

        let report = apply_fixes(&target).unwrap();

        assert_eq!(report.backup, temp.path().join("music_bingo.py.backup"));
        let backed_up = fs::read_to_string(&report.backup).unwrap();
        assert_eq!(backed_up, original);
    }

    #[test]
    fn test_apply_fixes_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("music_bingo.py");
        fs::write(&target, pristine_source()).unwrap();

        apply_fixes(&target).unwrap();
        let first_pass = fs::read_to_string(&target).unwrap();

        let report = apply_fixes(&target).unwrap();
        assert!(report.applied.is_empty());
        assert_eq!(report.skipped.len(), 3);
        assert_eq!(fs::read_to_string(&target).unwrap(), first_pass);
    }

    #[test]
    fn test_apply_fixes_missing_target() {
        let temp = TempDir::new().unwrap();
        let result = apply_fixes(&temp.path().join("nope.py"));
        assert!(matches!(result, Err(BingoError::PatchTargetMissing(_))));
    }

    #[test]
    fn test_apply_fixes_diverged_source_skips() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("music_bingo.py");
        fs::write(&target, "print('a rewritten game')\n").unwrap();

        let report = apply_fixes(&target).unwrap();
        assert!(report.applied.is_empty());
        assert_eq!(report.skipped.len(), 3);
    }

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("/tmp/music_bingo.py")),
            PathBuf::from("/tmp/music_bingo.py.backup")
        );
    }
}
