//! Configuration Management Module
//!
//! This module decides where the installer looks for things:
//! - the project root (which must contain `.git`)
//! - the template directory (`.git-hooks` by default)
//! - the template file name inside it
//!
//! # Configuration Sources
//!
//! Settings are layered, later sources winning:
//! 1. Built-in defaults
//! 2. An optional `hook-installer.toml` at the project root
//! 3. Environment variables prefixed with `HOOK_INSTALLER_`
//!    (e.g. `HOOK_INSTALLER_TEMPLATE_FILE`)
//!
//! The git directory name, the marker and the hook names are part of the
//! on-disk contract and are deliberately not configurable here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    GIT_DIR, HOOKS_SUBDIR,
    errors::{ConfigError, Result},
};

pub const CONFIG_FILE_NAME: &str = "hook-installer.toml";
pub const ENV_PREFIX: &str = "HOOK_INSTALLER";
pub const DEFAULT_TEMPLATE_DIR: &str = ".git-hooks";
pub const DEFAULT_TEMPLATE_FILE: &str = "hook-run-all-template.sh";

/// Effective installer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerConfig {
    /// Project root. Never read from the config file itself.
    #[serde(skip_deserializing)]
    pub root: PathBuf,

    /// Template directory, relative to `root` unless absolute.
    pub template_dir: PathBuf,

    /// Template file name inside `template_dir`.
    pub template_file: String,
}

impl InstallerConfig {
    /// Creates a configuration with the built-in defaults for `root`.
    ///
    /// # Arguments
    /// * `root` - The project root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            template_file: DEFAULT_TEMPLATE_FILE.to_string(),
        }
    }

    /// Loads the layered configuration for `root`.
    ///
    /// # Errors
    /// * If `hook-installer.toml` exists but cannot be parsed
    /// * If a `HOOK_INSTALLER_*` variable has an unusable value
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with_env(root, None)
    }

    /// Same as [`InstallerConfig::load`], reading `HOOK_INSTALLER_*` values from
    /// `env` instead of the process environment when it is `Some`.
    ///
    /// # Errors
    /// * See [`InstallerConfig::load`]
    pub fn load_with_env(
        root: impl Into<PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let root = root.into();
        let config_file = root.join(CONFIG_FILE_NAME);

        let settings = config::Config::builder()
            .set_default("template_dir", DEFAULT_TEMPLATE_DIR)
            .map_err(ConfigError::from)?
            .set_default("template_file", DEFAULT_TEMPLATE_FILE)
            .map_err(ConfigError::from)?
            .add_source(config::File::from(config_file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .map_err(ConfigError::from)?;

        let mut loaded: Self = settings.try_deserialize().map_err(ConfigError::from)?;
        loaded.root = root;

        Ok(loaded)
    }

    /// Renders the configuration as TOML, for `hook-installer config`.
    ///
    /// # Errors
    /// * If serialization fails
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(ConfigError::from)?)
    }

    /// Path of the repository's git metadata directory.
    pub fn git_dir(&self) -> PathBuf {
        self.root.join(GIT_DIR)
    }

    /// Path where hooks are installed.
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir().join(HOOKS_SUBDIR)
    }

    pub fn template_dir(&self) -> PathBuf {
        self.root.join(&self.template_dir)
    }

    /// Full path of the template file.
    pub fn template_path(&self) -> PathBuf {
        self.template_dir().join(&self.template_file)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
