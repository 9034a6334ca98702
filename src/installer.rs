//! Hook Installer
//!
//! Resolves the hooks and template directories, then installs every hook in
//! [`HOOK_NAMES`] order. The first failure stops the run; hooks written before
//! it stay in place.

use std::path::PathBuf;

use crate::{
    config::InstallerConfig,
    errors::{Result, WriteAction, WriteError},
    git::repository::{find_git_dir, resolve_hooks_dir, resolve_template_dir},
    hooks::{HOOK_NAMES, HookAction, HookOutcome, HookState, classify, install_hook},
};

/// Summary of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub hooks_dir: PathBuf,
    pub template_path: PathBuf,
    pub outcomes: Vec<HookOutcome>,
}

impl InstallReport {
    /// Hooks whose previous, hand-written content was saved to a `.backup` file.
    pub fn backed_up(&self) -> impl Iterator<Item = &HookOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.action == HookAction::BackedUp)
    }
}

pub struct Installer {
    config: InstallerConfig,
}

impl Installer {
    pub fn new(config: InstallerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Installs all known hooks.
    ///
    /// # Errors
    /// * `ResolutionError` if `.git` is missing or a directory cannot be created;
    ///   nothing has been written in that case
    /// * `WriteError` for the first hook that fails; earlier hooks stay installed
    pub fn install(&self) -> Result<InstallReport> {
        let hooks_dir = resolve_hooks_dir(&self.config)?;
        resolve_template_dir(&self.config)?;

        let template_path = self.config.template_path();

        let outcomes = HOOK_NAMES
            .into_iter()
            .map(|name| install_hook(name, &hooks_dir, &template_path))
            .collect::<std::result::Result<Vec<_>, WriteError>>()?;

        Ok(InstallReport {
            hooks_dir,
            template_path,
            outcomes,
        })
    }

    /// Reports the state of every known hook without changing anything.
    ///
    /// # Errors
    /// * `ResolutionError` if `.git` is missing
    /// * `WriteError` if an existing hook cannot be read
    pub fn status(&self) -> Result<Vec<(&'static str, HookState)>> {
        find_git_dir(&self.config)?;

        let hooks_dir = self.config.hooks_dir();

        HOOK_NAMES
            .into_iter()
            .map(|name| {
                let path = hooks_dir.join(name);
                match classify(&path) {
                    Ok(state) => Ok((name, state)),
                    Err(source) => Err(WriteError {
                        hook: name,
                        path,
                        action: WriteAction::ReadExisting,
                        source,
                    }
                    .into()),
                }
            })
            .collect()
    }
}

/// Installs all known hooks into the repository in the current directory.
///
/// Configuration is loaded from `hook-installer.toml` and `HOOK_INSTALLER_*`
/// variables when present.
///
/// # Errors
/// * See [`Installer::install`]
/// * If the configuration cannot be loaded
pub fn install() -> Result<InstallReport> {
    Installer::new(InstallerConfig::load(".")?).install()
}
