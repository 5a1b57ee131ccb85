//! Integration tests for the DiarySeal CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`. Prompts
//! are bypassed with `DIARY_PASSWORD`; every test runs against its own
//! temporary project directory.

use std::fs;

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: the binary with both key variables cleared.
fn diaryseal() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("diaryseal").expect("binary should exist");
    cmd.env_remove("DIARY_ENCRYPTION_KEY")
        .env_remove("DIARY_PASSWORD");
    cmd
}

/// Helper: a project with two diary entries.
fn project_with_entries() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let diary = tmp.path().join("diary");
    fs::create_dir_all(&diary).unwrap();
    fs::write(
        diary.join("2024-01-01-new-year.md"),
        "---\ntitle: New Year\ntags: [life]\n---\nFresh start.\n",
    )
    .unwrap();
    fs::write(diary.join("2024-02-14.md"), "# Valentine\n\nFlowers.\n").unwrap();
    tmp
}

#[test]
fn help_flag_shows_usage() {
    diaryseal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("passphrase-gated"))
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("unlock"))
        .stdout(predicate::str::contains("deploy"));
}

#[test]
fn version_flag_shows_version() {
    diaryseal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("diaryseal"));
}

#[test]
fn version_command_shows_protocol() {
    diaryseal()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("100000 iterations"))
        .stdout(predicate::str::contains("AES-256-GCM"));
}

#[test]
fn no_args_shows_help() {
    diaryseal()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn build_without_key_fails_and_writes_nothing() {
    let tmp = project_with_entries();

    diaryseal()
        .arg("build")
        .arg("-C")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("DIARY_ENCRYPTION_KEY"));

    assert!(!tmp.path().join("public/diary-data.json").exists());
}

#[test]
fn build_then_unlock_with_password() {
    let tmp = project_with_entries();

    diaryseal()
        .env("DIARY_PASSWORD", "correct-horse")
        .args(["build", "-C"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted 2 entries"));

    let archive = fs::read_to_string(tmp.path().join("public/diary-data.json")).unwrap();
    assert!(!archive.contains("Flowers"));
    assert!(archive.contains("\"version\":\"1\""));

    diaryseal()
        .env("DIARY_PASSWORD", "correct-horse")
        .args(["unlock", "--json", "-C"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Valentine"))
        .stdout(predicate::str::contains("New Year"));
}

#[test]
fn build_reads_password_from_dotenv() {
    let tmp = project_with_entries();
    fs::write(tmp.path().join(".env"), "DIARY_PASSWORD=\"correct-horse\"\n").unwrap();

    diaryseal()
        .args(["build", "-C"])
        .arg(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("public/passphrase-hash.txt").exists());
}

#[test]
fn unlock_with_wrong_password_fails() {
    let tmp = project_with_entries();

    diaryseal()
        .env("DIARY_PASSWORD", "correct-horse")
        .args(["build", "-C"])
        .arg(tmp.path())
        .assert()
        .success();

    diaryseal()
        .env("DIARY_PASSWORD", "wrong-pass")
        .args(["unlock", "-C"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect passphrase"))
        .stdout(predicate::str::contains("Valentine").not());
}

#[test]
fn unlock_before_build_fails() {
    let tmp = TempDir::new().unwrap();

    diaryseal()
        .env("DIARY_PASSWORD", "correct-horse")
        .args(["unlock", "-C"])
        .arg(tmp.path())
        .assert()
        .failure();
}

#[test]
fn setup_prints_key_that_build_accepts() {
    let tmp = project_with_entries();

    let out = diaryseal()
        .env("DIARY_PASSWORD", "correct-horse")
        .args(["setup", "-C"])
        .arg(tmp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();

    let key = stdout
        .lines()
        .map(str::trim)
        .find(|l| l.len() == 64 && l.chars().all(|c| c.is_ascii_hexdigit()))
        .expect("setup should print the hex key")
        .to_string();

    assert!(tmp.path().join("keys/passphrase-hash.txt").exists());
    let gitignore = fs::read_to_string(tmp.path().join(".gitignore")).unwrap();
    assert!(gitignore.lines().any(|l| l == ".env"));

    diaryseal()
        .env("DIARY_ENCRYPTION_KEY", &key)
        .args(["build", "-C"])
        .arg(tmp.path())
        .assert()
        .success();

    diaryseal()
        .env("DIARY_PASSWORD", "correct-horse")
        .args(["unlock", "--json", "-C"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh start."));
}

#[test]
fn setup_refuses_to_overwrite_without_force() {
    let tmp = TempDir::new().unwrap();

    diaryseal()
        .env("DIARY_PASSWORD", "correct-horse")
        .args(["setup", "-C"])
        .arg(tmp.path())
        .assert()
        .success();

    diaryseal()
        .env("DIARY_PASSWORD", "battery-staple")
        .args(["setup", "-C"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    diaryseal()
        .env("DIARY_PASSWORD", "battery-staple")
        .args(["setup", "--force", "-C"])
        .arg(tmp.path())
        .assert()
        .success();
}

#[test]
fn setup_rejects_short_password_from_env() {
    let tmp = TempDir::new().unwrap();

    diaryseal()
        .env("DIARY_PASSWORD", "abc")
        .args(["setup", "-C"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 6"));

    assert!(!tmp.path().join("keys/passphrase-hash.txt").exists());
}

#[test]
fn deploy_outside_git_repo_fails() {
    let tmp = TempDir::new().unwrap();

    diaryseal()
        .args(["deploy", "--no-push", "-C"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn completions_bash_mentions_subcommands() {
    diaryseal()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diaryseal"))
        .stdout(predicate::str::contains("unlock"));
}
