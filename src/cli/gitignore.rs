//! `.gitignore` patching used by `setup`.
//!
//! The local `.env` may hold the key or passphrase and must never be
//! committed alongside the public archive.

use std::fs;
use std::path::Path;

use crate::cli::output;

/// Append `entry` to `.gitignore` if not already present.
///
/// Creates the file if it doesn't exist. Write errors are reported as a
/// warning; a missing ignore rule should not abort `setup`.
pub fn patch_gitignore(project_dir: &Path, entry: &str) {
    let gitignore_path = project_dir.join(".gitignore");

    let existing = fs::read_to_string(&gitignore_path).unwrap_or_default();

    if existing.lines().any(|line| line.trim() == entry) {
        return;
    }

    let separator = if existing.ends_with('\n') || existing.is_empty() {
        ""
    } else {
        "\n"
    };

    match fs::write(&gitignore_path, format!("{existing}{separator}{entry}\n")) {
        Ok(()) => output::info(&format!("Added '{entry}' to .gitignore")),
        Err(e) => output::warning(&format!("Could not update .gitignore: {e}")),
    }
}
