use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MARKER: &str = "### Auto-generated by template-kotlin-jvm-library ###";
const TEMPLATE: &str = "#!/bin/sh\necho \"running $(basename \"$0\")\"\n";

fn repository() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::create_dir(temp_dir.path().join(".git-hooks")).unwrap();
    fs::write(
        temp_dir.path().join(".git-hooks/hook-run-all-template.sh"),
        TEMPLATE,
    )
    .unwrap();
    temp_dir
}

fn hook_installer(dir: &Path) -> Command {
    let mut command = Command::cargo_bin("hook-installer").unwrap();
    command
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("HOOK_INSTALLER_TEMPLATE_DIR")
        .env_remove("HOOK_INSTALLER_TEMPLATE_FILE");
    command
}

#[test]
fn test_install_from_repository_root() {
    let repo = repository();

    hook_installer(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed 22 git hooks in ./.git/hooks"));

    let pre_commit = fs::read_to_string(repo.path().join(".git/hooks/pre-commit")).unwrap();
    assert_eq!(pre_commit, format!("{TEMPLATE}{MARKER}"));
}

#[test]
fn test_install_reports_backups() {
    let repo = repository();
    fs::create_dir(repo.path().join(".git/hooks")).unwrap();
    fs::write(repo.path().join(".git/hooks/pre-commit"), "#!/bin/sh\nmake lint\n").unwrap();

    hook_installer(repo.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("pre-commit -> pre-commit.backup"));

    assert_eq!(
        fs::read_to_string(repo.path().join(".git/hooks/pre-commit.backup")).unwrap(),
        "#!/bin/sh\nmake lint\n"
    );
}

#[test]
fn test_install_with_directory_flag() {
    let repo = repository();
    let elsewhere = TempDir::new().unwrap();

    hook_installer(elsewhere.path())
        .arg("--directory")
        .arg(repo.path())
        .arg("--verbose")
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("post-index-change: created"));

    assert!(repo.path().join(".git/hooks/post-index-change").is_file());
}

#[test]
fn test_install_outside_repository_fails() {
    let dir = TempDir::new().unwrap();

    hook_installer(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Couldn't find .git directory"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_install_without_template_fails() {
    let repo = repository();
    fs::remove_file(repo.path().join(".git-hooks/hook-run-all-template.sh")).unwrap();

    hook_installer(repo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("read hook template"))
        .stderr(predicate::str::contains("applypatch-msg"));
}

#[test]
fn test_install_uses_config_file() {
    let repo = repository();
    fs::create_dir(repo.path().join("scripts")).unwrap();
    fs::write(repo.path().join("scripts/hook.sh"), "#!/bin/sh\nexit 0\n").unwrap();
    fs::write(
        repo.path().join("hook-installer.toml"),
        "template_dir = \"scripts\"\ntemplate_file = \"hook.sh\"\n",
    )
    .unwrap();

    hook_installer(repo.path()).assert().success();

    assert_eq!(
        fs::read_to_string(repo.path().join(".git/hooks/update")).unwrap(),
        format!("#!/bin/sh\nexit 0\n{MARKER}")
    );
}

#[test]
fn test_env_overrides_config_file() {
    let repo = repository();
    fs::create_dir(repo.path().join("from-env")).unwrap();
    fs::write(repo.path().join("from-env/hook.sh"), "#!/bin/sh\necho env\n").unwrap();
    fs::write(
        repo.path().join("hook-installer.toml"),
        "template_dir = \"from-file\"\ntemplate_file = \"hook.sh\"\n",
    )
    .unwrap();

    hook_installer(repo.path())
        .env("HOOK_INSTALLER_TEMPLATE_DIR", "from-env")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(repo.path().join(".git/hooks/pre-commit")).unwrap(),
        format!("#!/bin/sh\necho env\n{MARKER}")
    );
    assert!(!repo.path().join("from-file").exists());
}

#[test]
fn test_status_after_install() {
    let repo = repository();

    hook_installer(repo.path()).arg("install").assert().success();
    fs::write(repo.path().join(".git/hooks/commit-msg"), "#!/bin/sh\n").unwrap();

    hook_installer(repo.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"commit-msg\s+user-authored").unwrap())
        .stdout(predicate::str::is_match(r"pre-push\s+generated").unwrap());
}

#[test]
fn test_list_prints_every_hook() {
    let dir = TempDir::new().unwrap();

    let output = hook_installer(dir.path()).arg("list").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 22);
    assert_eq!(names.first(), Some(&"applypatch-msg"));
    assert_eq!(names.last(), Some(&"post-index-change"));
}

#[test]
fn test_config_prints_defaults() {
    let dir = TempDir::new().unwrap();

    hook_installer(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("template_dir = \".git-hooks\""));
}
