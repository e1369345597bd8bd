//! Python interpreter detection.

use std::path::{Path, PathBuf};

/// Returns platform-specific default Python installation paths.
fn default_paths() -> Vec<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let mut paths = vec![
            PathBuf::from("/opt/homebrew/bin/python3"),
            PathBuf::from("/usr/local/bin/python3"),
            PathBuf::from("/Library/Frameworks/Python.framework/Versions/Current/bin/python3"),
            PathBuf::from("/usr/bin/python3"),
        ];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".pyenv/shims/python3"));
        }

        paths
    }

    #[cfg(target_os = "windows")]
    {
        let mut paths = vec![PathBuf::from(r"C:\Windows\py.exe")];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(r"AppData\Local\Programs\Python\Launcher\py.exe"));
        }

        paths
    }

    #[cfg(target_os = "linux")]
    {
        let mut paths = vec![
            PathBuf::from("/usr/bin/python3"),
            PathBuf::from("/usr/local/bin/python3"),
        ];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".pyenv/shims/python3"));
            paths.push(home.join(".local/bin/python3"));
        }

        paths
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check if a path is executable.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "exe" || ext == "bat" || ext == "cmd"
        })
        .unwrap_or(false)
}

#[cfg(not(any(unix, windows)))]
fn is_executable(path: &Path) -> bool {
    path.exists()
}

/// Attempt to find a Python 3 interpreter.
///
/// Detection order:
/// 1. PATH search for `python3`, then `python` (via `which`)
/// 2. Platform-specific default paths
///
/// An explicit interpreter (the `--python` flag, `BINGO_PYTHON`, or the
/// config file) takes precedence over this function and is resolved by the
/// caller.
pub fn find_python() -> Option<PathBuf> {
    // 1. Check PATH (using which)
    if let Ok(path) = which::which("python3") {
        return Some(path);
    }

    if let Ok(path) = which::which("python") {
        return Some(path);
    }

    // 2. Check default installation paths
    default_paths()
        .into_iter()
        .find(|path| path.exists() && is_executable(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_not_empty() {
        let paths = default_paths();
        // At least one default path should be defined for supported platforms
        #[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
        assert!(!paths.is_empty());
    }
}
