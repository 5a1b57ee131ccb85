//! `diaryseal build`: encrypt the diary into the site archive.

use crate::archive::packager;
use crate::cli::output;
use crate::cli::Cli;
use crate::config::{KeySource, Settings};
use crate::errors::Result;

/// Execute the `build` command.
///
/// A missing key source is a hard error: nothing is written and the
/// process exits non-zero.
pub fn execute(cli: &Cli) -> Result<()> {
    let project_dir = &cli.project_dir;
    let settings = Settings::load(project_dir)?;
    let source = KeySource::resolve(project_dir)?;

    output::info("Encrypting diary entries...");
    let report = packager::build(project_dir, &settings, source)?;

    if report.used_sample {
        output::warning(&format!(
            "No diary directory at {}; packaged a sample entry instead.",
            settings.diary_path(project_dir).display()
        ));
    }
    for skipped in &report.skipped {
        output::warning(&format!("Skipped {}: {}", skipped.filename, skipped.reason));
    }

    output::success(&format!(
        "Encrypted {} entries into {}",
        report.count,
        report.archive_path.display()
    ));
    output::info(&format!(
        "Verification hash published to {}",
        report.hash_path.display()
    ));

    Ok(())
}
