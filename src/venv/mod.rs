//! Virtual environment creation and use.
//!
//! The environment is the standard `python -m venv` layout. "Activation" in
//! this crate means addressing the environment's own interpreter directly;
//! the generated launcher sources `bin/activate` in a shell instead.

mod builder;

pub use builder::{Venv, VenvBuilder};

/// Fixed relative location of the environment inside the project directory.
pub const VENV_DIR_NAME: &str = "venv";
