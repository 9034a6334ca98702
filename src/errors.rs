use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Main error type for the hook installer
#[derive(Error, Debug)]
pub enum InstallerError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while locating or creating the directories an install needs.
///
/// These are always reported before any hook file is touched.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error(
        "Couldn't find .git directory at {}. Please make sure you are in the project root directory.",
        .path.display()
    )]
    GitDirNotFound { path: PathBuf },

    #[error("Failed to create hooks directory {}: {source}", .path.display())]
    HooksDirCreation { path: PathBuf, source: io::Error },

    #[error("Failed to find or create template directory {}: {source}", .path.display())]
    TemplateDirCreation { path: PathBuf, source: io::Error },
}

/// The filesystem step that failed while installing a single hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    ReadExisting,
    Backup,
    RemoveGenerated,
    ReadTemplate,
    Write,
    SetPermissions,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::ReadExisting => "read existing hook",
            Self::Backup => "back up existing hook",
            Self::RemoveGenerated => "remove previously generated hook",
            Self::ReadTemplate => "read hook template",
            Self::Write => "write hook",
            Self::SetPermissions => "mark hook executable",
        };

        f.write_str(description)
    }
}

/// A filesystem failure on one specific hook. Aborts the remaining hooks.
#[derive(Error, Debug)]
#[error("Failed to {action} for '{hook}' ({}): {source}", .path.display())]
pub struct WriteError {
    pub hook: &'static str,
    pub path: PathBuf,
    pub action: WriteAction,
    #[source]
    pub source: io::Error,
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration - please check hook-installer.toml and HOOK_INSTALLER_* variables: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Could not render configuration as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Type alias for Result using `InstallerError`
pub type Result<T> = std::result::Result<T, InstallerError>;
