//! Integration tests for `bingokit setup`.
//!
//! The flows run against a stub interpreter (a shell script that records its
//! argv and fakes `python -m venv`), so nothing real gets installed.

#![cfg(unix)]

use assert_cmd::Command;
use bingokit::launcher::{LAUNCHER_FILE_NAME, LAUNCHER_TEMPLATE};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a command to run bingokit.
#[allow(deprecated)]
fn bingokit() -> Command {
    let mut cmd = Command::cargo_bin("bingokit").unwrap();
    cmd.env_remove("BINGO_PYTHON");
    cmd
}

/// Write an executable stub interpreter that logs its argv to `$STUB_LOG`
/// and fakes `python -m venv <dir>` by laying out a bin/ directory with a
/// copy of itself as the venv's python.
fn write_stub_python(dir: &Path) -> PathBuf {
    let stub = dir.join("python3");
    fs::write(
        &stub,
        concat!(
            "#!/bin/sh\n",
            "if [ -n \"$STUB_LOG\" ]; then echo \"$@\" >> \"$STUB_LOG\"; fi\n",
            "if [ \"$1\" = \"-m\" ] && [ \"$2\" = \"venv\" ]; then\n",
            "  mkdir -p \"$3/bin\"\n",
            "  cp \"$0\" \"$3/bin/python\"\n",
            "fi\n",
            "exit 0\n",
        ),
    )
    .unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
    stub
}

/// Stub whose pip invocations fail; venv creation still works.
fn write_pip_failing_stub(dir: &Path) -> PathBuf {
    let stub = dir.join("python3");
    fs::write(
        &stub,
        concat!(
            "#!/bin/sh\n",
            "if [ \"$1\" = \"-m\" ] && [ \"$2\" = \"venv\" ]; then\n",
            "  mkdir -p \"$3/bin\"\n",
            "  cp \"$0\" \"$3/bin/python\"\n",
            "  exit 0\n",
            "fi\n",
            "case \"$*\" in *pip*) exit 1 ;; esac\n",
            "exit 0\n",
        ),
    )
    .unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
    stub
}

#[test]
fn test_setup_creates_venv_and_launcher() {
    let bin = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let stub = write_stub_python(bin.path());
    let log = bin.path().join("calls.log");

    bingokit()
        .current_dir(project.path())
        .env("STUB_LOG", &log)
        .args(["setup", ".", "--python"])
        .arg(&stub)
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating environment"))
        .stdout(predicate::str::contains("Setup complete!"));

    // Environment directory (laid out by the stub's venv handler)
    assert!(project.path().join("venv").is_dir());

    // Launcher: byte-identical to the template, executable
    let launcher = project.path().join(LAUNCHER_FILE_NAME);
    assert_eq!(fs::read_to_string(&launcher).unwrap(), LAUNCHER_TEMPLATE);
    let mode = fs::metadata(&launcher).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);

    // The recorded flow: venv creation, pip upgrade, library install
    let calls = fs::read_to_string(&log).unwrap();
    assert!(calls.lines().any(|l| l.starts_with("-m venv")));
    assert!(calls
        .lines()
        .any(|l| l.contains("pip install --upgrade pip")));
    assert!(calls
        .lines()
        .any(|l| l.contains("pip install pygame mutagen")));
}

#[test]
fn test_setup_rerun_is_idempotent() {
    let bin = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let stub = write_stub_python(bin.path());

    for _ in 0..2 {
        bingokit()
            .current_dir(project.path())
            .args(["setup", ".", "--python"])
            .arg(&stub)
            .assert()
            .success();
    }

    // Second run reports reuse and leaves exactly one identical launcher
    bingokit()
        .current_dir(project.path())
        .args(["setup", ".", "--python"])
        .arg(&stub)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reusing environment"));

    let launchers: Vec<_> = fs::read_dir(project.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("run_bingo"))
        .collect();
    assert_eq!(launchers.len(), 1);
    assert_eq!(
        fs::read_to_string(project.path().join(LAUNCHER_FILE_NAME)).unwrap(),
        LAUNCHER_TEMPLATE
    );
}

#[test]
fn test_setup_fails_without_interpreter() {
    let project = TempDir::new().unwrap();

    bingokit()
        .current_dir(project.path())
        .env("BINGO_PYTHON", "/definitely/not/a/python3")
        .args(["setup", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));

    // Fatal precondition: nothing was created
    assert!(!project.path().join("venv").exists());
    assert!(!project.path().join(LAUNCHER_FILE_NAME).exists());
}

#[test]
fn test_setup_continues_past_install_failures() {
    let bin = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let stub = write_pip_failing_stub(bin.path());

    // Install steps fail, but the command still exits 0, still writes the
    // launcher, and says what is left to do
    bingokit()
        .current_dir(project.path())
        .args(["setup", ".", "--python"])
        .arg(&stub)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning"))
        .stdout(predicate::str::contains("Setup finished with problems"));

    assert!(project.path().join(LAUNCHER_FILE_NAME).exists());
}
