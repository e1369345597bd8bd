//! Command implementations.

pub mod clean;
pub mod doctor;
pub mod info;
pub mod library;
pub mod patch;
pub mod setup;
