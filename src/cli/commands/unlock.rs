//! `diaryseal unlock`: open the published archive with a passphrase.
//!
//! Mirrors what the site's viewer does: verify, re-derive, decrypt. A
//! failure is always reported as "Incorrect passphrase".

use crate::archive::format::{read_archive, read_hash_artifact};
use crate::archive::UnlockGate;
use crate::cli::output;
use crate::cli::{existing_passphrase, Cli};
use crate::config::Settings;
use crate::errors::{DiarySealError, Result};

/// Execute the `unlock` command.
pub fn execute(cli: &Cli, json: bool, full: bool) -> Result<()> {
    let project_dir = &cli.project_dir;
    let settings = Settings::load(project_dir)?;

    let archive = read_archive(&settings.archive_path(project_dir))?;
    archive.ensure_supported()?;
    let stored_hash = read_hash_artifact(&settings.published_hash_path(project_dir))?;

    let passphrase = existing_passphrase()?;

    let gate = UnlockGate::new();
    let records = gate.attempt(&passphrase, &archive, &stored_hash)?;

    if json {
        let text = serde_json::to_string_pretty(&records)
            .map_err(|e| DiarySealError::SerializationError(format!("records: {e}")))?;
        println!("{text}");
    } else if full {
        output::print_records_full(&records);
    } else {
        output::info(&format!(
            "{} entries, built {}",
            records.len(),
            archive.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output::print_records_table(&records);
    }

    Ok(())
}
