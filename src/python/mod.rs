//! Python interpreter interaction module.

mod detect;
mod executor;

pub use detect::find_python;
pub use executor::{PythonExecutor, PythonInfo, Verbosity};
