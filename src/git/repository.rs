//! Repository Layout
//!
//! Resolution of the two directories an install needs: the repository's
//! hooks directory under `.git`, and the project's template directory.
//! Both are resolved relative to a fixed project root rather than by asking
//! `git`, so the installer must be run from the repository root.

use std::{fs, path::PathBuf};

use crate::{
    config::InstallerConfig,
    errors::{ResolutionError, Result},
};

/// Finds the repository's `.git` directory under the configured root.
///
/// Nothing is created by this function.
///
/// # Errors
///
/// Returns `ResolutionError::GitDirNotFound` if `<root>/.git` is not a
/// directory (missing, or a `.git` file as used by worktrees and submodules).
///
/// # Examples
///
/// ```no_run
/// use hook_installer::{config::InstallerConfig, git::repository::find_git_dir};
///
/// let config = InstallerConfig::with_root(".");
/// match find_git_dir(&config) {
///     Ok(git_dir) => println!("Git directory: {}", git_dir.display()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub fn find_git_dir(config: &InstallerConfig) -> Result<PathBuf> {
    let git_dir = config.git_dir();

    if git_dir.is_dir() {
        Ok(git_dir)
    } else {
        Err(ResolutionError::GitDirNotFound { path: git_dir }.into())
    }
}

/// Resolves `.git/hooks`, creating it if it does not exist yet.
///
/// # Errors
///
/// Returns an error if:
/// - `.git` is not a directory under the root
/// - The hooks directory is missing and cannot be created
///
/// # Returns
///
/// The path of the hooks directory
pub fn resolve_hooks_dir(config: &InstallerConfig) -> Result<PathBuf> {
    find_git_dir(config)?;

    let hooks_dir = config.hooks_dir();

    if !hooks_dir.exists() {
        fs::create_dir(&hooks_dir).map_err(|source| ResolutionError::HooksDirCreation {
            path: hooks_dir.clone(),
            source,
        })?;
    }

    Ok(hooks_dir)
}

/// Resolves the template directory, creating it if it is not a directory yet.
///
/// Only the directory is created; a missing template file is reported later,
/// when the first hook is written.
///
/// # Errors
///
/// Returns `ResolutionError::TemplateDirCreation` if the directory cannot be
/// created (for instance because a regular file already sits at that path).
pub fn resolve_template_dir(config: &InstallerConfig) -> Result<PathBuf> {
    let template_dir = config.template_dir();

    if !template_dir.is_dir() {
        fs::create_dir(&template_dir).map_err(|source| ResolutionError::TemplateDirCreation {
            path: template_dir.clone(),
            source,
        })?;
    }

    Ok(template_dir)
}
