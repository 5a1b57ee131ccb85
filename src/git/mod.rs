//! Git integration: publishing a freshly built archive.
//!
//! Thin wrappers over the `git` binary, run inside the project directory.
//! Used by `diaryseal deploy` to pull the diary submodule, commit the
//! rebuilt artifacts, and push.

use std::path::Path;
use std::process::{Command, Output};

use crate::errors::{DiarySealError, Result};

/// Run `git <args>` in `project_dir`, returning captured output on success.
fn git(project_dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new("git")
        .args(args)
        .current_dir(project_dir)
        .output()
        .map_err(|e| DiarySealError::GitFailed {
            command: args.join(" "),
            detail: format!("could not run git: {e}"),
        })?;

    if !output.status.success() {
        return Err(DiarySealError::GitFailed {
            command: args.join(" "),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}

/// `true` if `project_dir` is inside a git work tree.
pub fn is_repo(project_dir: &Path) -> bool {
    git(project_dir, &["rev-parse", "--is-inside-work-tree"]).is_ok()
}

/// Pull the latest commit of a submodule from its remote.
pub fn update_submodule(project_dir: &Path, name: &str) -> Result<()> {
    git(project_dir, &["submodule", "update", "--remote", name]).map(|_| ())
}

/// Short-format status lines (`git status --porcelain`).
///
/// Empty when the work tree is clean.
pub fn status_porcelain(project_dir: &Path) -> Result<Vec<String>> {
    let output = git(project_dir, &["status", "--porcelain"])?;
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Stage the given paths (relative to `project_dir`).
pub fn add(project_dir: &Path, paths: &[&str]) -> Result<()> {
    let mut args = vec!["add", "--"];
    args.extend_from_slice(paths);
    git(project_dir, &args).map(|_| ())
}

/// Commit whatever is staged.
pub fn commit(project_dir: &Path, message: &str) -> Result<()> {
    git(project_dir, &["commit", "-m", message]).map(|_| ())
}

/// Push `branch` to `remote`.
pub fn push(project_dir: &Path, remote: &str, branch: &str) -> Result<()> {
    git(project_dir, &["push", remote, branch]).map(|_| ())
}
