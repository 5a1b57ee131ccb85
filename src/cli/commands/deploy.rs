//! `diaryseal deploy`: pull new entries, rebuild, commit and push.
//!
//! Steps:
//! 1. `git submodule update --remote <submodule>` (failure is not fatal)
//! 2. `diaryseal build`
//! 3. stop if the work tree is clean
//! 4. stage the archive, the published hash and the submodule
//! 5. commit and push

use std::path::Path;

use chrono::Local;

use crate::cli::output;
use crate::cli::Cli;
use crate::config::Settings;
use crate::errors::{DiarySealError, Result};
use crate::git;

/// Execute the `deploy` command.
pub fn execute(
    cli: &Cli,
    remote: &str,
    branch: &str,
    submodule: &str,
    no_push: bool,
) -> Result<()> {
    let project_dir = &cli.project_dir;
    if !git::is_repo(project_dir) {
        return Err(DiarySealError::CommandFailed(format!(
            "{} is not a git repository",
            project_dir.display()
        )));
    }
    let settings = Settings::load(project_dir)?;

    // 1. Submodule.
    output::info(&format!("Checking submodule '{submodule}' for updates..."));
    match git::update_submodule(project_dir, submodule) {
        Ok(()) => output::success("Submodule updated."),
        Err(e) => output::info(&format!("No submodule update ({e}); continuing.")),
    }

    // 2. Build.
    super::build::execute(cli)?;

    // 3. Anything to commit?
    let changes = git::status_porcelain(project_dir)?;
    if changes.is_empty() {
        output::success("Nothing to commit.");
        output::tip("The diary may be unchanged since the last deploy.");
        return Ok(());
    }
    output::info("Changes:");
    for line in &changes {
        println!("  {line}");
    }

    // 4. Stage.
    let archive = relative(&settings.public_dir, &settings.archive_file);
    let hash = relative(&settings.public_dir, &settings.hash_file);
    let mut paths = vec![archive.as_str(), hash.as_str()];
    if settings.diary_path(project_dir).exists() {
        paths.push(settings.diary_dir.as_str());
    }
    git::add(project_dir, &paths)?;

    // 5. Commit and push.
    let message = format!(
        "Update encrypted diary - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    git::commit(project_dir, &message)?;
    output::success(&format!("Committed: {message}"));

    if no_push {
        output::tip(&format!("Skipped push; run `git push {remote} {branch}` when ready."));
        return Ok(());
    }

    git::push(project_dir, remote, branch)?;
    output::success(&format!("Pushed to {remote}/{branch}."));

    Ok(())
}

fn relative(dir: &str, file: &str) -> String {
    Path::new(dir).join(file).to_string_lossy().to_string()
}
