//! Launcher artifact generation.
//!
//! The launcher is a fixed shell script: no substitution happens at
//! generation time. Path resolution (`dirname "$0"`) and activation happen
//! when the script itself runs.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the generated launcher.
pub const LAUNCHER_FILE_NAME: &str = "run_bingo.sh";

/// The launcher body, written verbatim.
pub const LAUNCHER_TEMPLATE: &str = "#!/bin/bash\n\
cd \"$(dirname \"$0\")\"\n\
source venv/bin/activate\n\
python music_bingo.py\n";

/// Write the launcher into the project directory and mark it executable.
///
/// Overwrites any existing launcher, so reruns leave exactly one copy with
/// identical content.
pub fn write_launcher(project_dir: &Path) -> Result<PathBuf> {
    let path = project_dir.join(LAUNCHER_FILE_NAME);
    fs::write(&path, LAUNCHER_TEMPLATE)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(path)
}
