pub mod cli;
pub mod config;
pub mod errors;
pub mod git;
pub mod hooks;
pub mod installer;
pub mod utils;

pub use installer::{InstallReport, Installer, install};

/// Git metadata directory, relative to the project root.
pub const GIT_DIR: &str = ".git";

/// Hooks directory, relative to [`GIT_DIR`].
pub const HOOKS_SUBDIR: &str = "hooks";
