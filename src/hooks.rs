//! Hook Registry and Per-Hook Installation
//!
//! Holds the fixed list of hook names, the marker that identifies generated
//! files, and the algorithm that writes a single hook while protecting any
//! hand-written hook already at that path.
//!
//! # Ownership detection
//!
//! A file is considered generated if its text contains [`MARKER`] anywhere.
//! This is a plain substring check: a generated hook whose marker was edited
//! away is treated as user-authored (and backed up) on the next run, and a
//! user script that happens to contain the marker text is treated as ours.

use std::{
    ffi::OsString,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::errors::{WriteAction, WriteError};

/// Appended to every generated hook. Changing it orphans earlier installs.
pub const MARKER: &str = "### Auto-generated by template-kotlin-jvm-library ###";

/// Suffix of the copy made of a user-authored hook before it is replaced.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Every hook name the installer writes, in installation order.
pub const HOOK_NAMES: [&str; 22] = [
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "pre-receive",
    "update",
    "post-receive",
    "post-update",
    "push-to-checkout",
    "pre-auto-gc",
    "post-rewrite",
    "sendemail-validate",
    "fsmonitor-watchman",
    "p4-pre-submit",
    "post-index-change",
];

/// What currently sits at a hook path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    Missing,
    Generated,
    UserAuthored,
}

impl fmt::Display for HookState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "missing",
            Self::Generated => "generated",
            Self::UserAuthored => "user-authored",
        })
    }
}

/// What an install did for one hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    /// No file existed.
    Created,
    /// A previously generated file was replaced.
    Regenerated,
    /// A user-authored file was copied to `<name>.backup` and replaced.
    BackedUp,
}

impl fmt::Display for HookAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Regenerated => "regenerated",
            Self::BackedUp => "backed up and replaced",
        })
    }
}

/// Result of installing one hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    pub name: &'static str,
    pub path: PathBuf,
    pub action: HookAction,
}

/// Returns `true` if `content` carries the generator marker.
pub fn is_generated(content: &str) -> bool {
    content.contains(MARKER)
}

/// Content of a generated hook: the template followed directly by the marker.
pub fn generated_content(template: &str) -> String {
    let mut content = String::with_capacity(template.len() + MARKER.len());
    content.push_str(template);
    content.push_str(MARKER);
    content
}

/// Path of the backup made for the hook at `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut backup: OsString = path.as_os_str().to_owned();
    backup.push(BACKUP_SUFFIX);
    PathBuf::from(backup)
}

/// Classifies the file at `path`.
///
/// Content is decoded lossily, so a binary or non-UTF-8 hook is still
/// classified (as user-authored) instead of failing the read.
///
/// # Errors
/// * If the file exists but cannot be read
pub fn classify(path: &Path) -> io::Result<HookState> {
    if !path.exists() {
        return Ok(HookState::Missing);
    }

    let bytes = fs::read(path)?;

    if is_generated(&String::from_utf8_lossy(&bytes)) {
        Ok(HookState::Generated)
    } else {
        Ok(HookState::UserAuthored)
    }
}

/// Installs hook `name` into `hooks_dir` from the template at `template_path`.
///
/// The template is read before the existing hook is touched, so a missing
/// template never costs a generated hook.
///
/// # Errors
/// * If the existing hook cannot be read, backed up or removed
/// * If the template cannot be read
/// * If the hook cannot be written or made executable
pub fn install_hook(
    name: &'static str,
    hooks_dir: &Path,
    template_path: &Path,
) -> Result<HookOutcome, WriteError> {
    let path = hooks_dir.join(name);

    // Read before touching the existing hook, so a missing template never
    // deletes a generated hook or leaves a stray backup behind.
    let template = fs::read_to_string(template_path)
        .map_err(write_error(name, WriteAction::ReadTemplate, template_path))?;

    let state = classify(&path).map_err(write_error(name, WriteAction::ReadExisting, &path))?;

    let action = match state {
        HookState::Missing => HookAction::Created,
        HookState::Generated => {
            fs::remove_file(&path)
                .map_err(write_error(name, WriteAction::RemoveGenerated, &path))?;
            HookAction::Regenerated
        }
        HookState::UserAuthored => {
            let backup = backup_path(&path);
            fs::copy(&path, &backup)
                .map_err(write_error(name, WriteAction::Backup, &backup))?;
            HookAction::BackedUp
        }
    };

    fs::write(&path, generated_content(&template))
        .map_err(write_error(name, WriteAction::Write, &path))?;
    make_executable(&path)
        .map_err(write_error(name, WriteAction::SetPermissions, &path))?;

    Ok(HookOutcome { name, path, action })
}

fn write_error(
    hook: &'static str,
    action: WriteAction,
    path: &Path,
) -> impl FnOnce(io::Error) -> WriteError + use<> {
    let path = path.to_path_buf();
    move |source| WriteError {
        hook,
        path,
        action,
        source,
    }
}

/// Adds the execute bits for user, group and other.
#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
