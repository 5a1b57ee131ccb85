//! Build-time packaging: diary directory in, site artifacts out.
//!
//! A build always re-encrypts the full collection under one key and
//! replaces both artifacts. There is no incremental mode.

use std::path::{Path, PathBuf};

use chrono::{Local, Utc};

use super::cipher::encrypt_records;
use super::format::{self, EncryptedArchive, FORMAT_VERSION};
use crate::config::{KeySource, Settings, PASSWORD_VAR};
use crate::crypto::{self, DerivedKey};
use crate::diary::{self, sort_newest_first, DiaryRecord, SkippedFile};
use crate::errors::{DiarySealError, Result};

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of records in the archive.
    pub count: usize,
    /// Source files left out of the archive.
    pub skipped: Vec<SkippedFile>,
    /// `true` when the diary directory was missing and the welcome entry was used.
    pub used_sample: bool,
    pub archive_path: PathBuf,
    pub hash_path: PathBuf,
    /// The published verification hash.
    pub verification_hash: String,
}

/// Encrypt a record collection into an archive.
///
/// Records are sorted newest first before serialization regardless of
/// the order they arrive in.
pub fn package(mut records: Vec<DiaryRecord>, key: &DerivedKey) -> Result<EncryptedArchive> {
    sort_newest_first(&mut records);

    let data = encrypt_records(&records, key)?;

    Ok(EncryptedArchive {
        data,
        timestamp: Utc::now(),
        count: records.len(),
        version: FORMAT_VERSION.to_string(),
    })
}

/// Run a full build for the project at `project_dir`.
///
/// 1. Load the diary directory (or the welcome entry if it is missing).
/// 2. Settle the verification hash: the committed one, or one computed
///    from a configured passphrase. When both exist they must agree.
/// 3. Derive or parse the key, encrypt, and drop the key.
/// 4. Write the archive and the published hash copy.
pub fn build(project_dir: &Path, settings: &Settings, source: KeySource) -> Result<BuildReport> {
    // 1. Records.
    let diary_dir = settings.diary_path(project_dir);
    let (records, skipped, used_sample) = if diary_dir.is_dir() {
        let report = diary::load_dir(&diary_dir)?;
        (report.records, report.skipped, false)
    } else {
        (vec![diary::welcome_entry(Local::now().date_naive())], Vec::new(), true)
    };

    // 2. Verification hash.
    let stored_hash_path = settings.hash_path(project_dir);
    let stored_hash = if stored_hash_path.exists() {
        Some(format::read_hash_artifact(&stored_hash_path)?)
    } else {
        None
    };

    let verification_hash = match (stored_hash, source.passphrase()) {
        (Some(hash), Some(passphrase)) => {
            if !crypto::check(passphrase, &hash) {
                return Err(DiarySealError::ConfigError(format!(
                    "{PASSWORD_VAR} does not match {}",
                    stored_hash_path.display()
                )));
            }
            hash
        }
        (Some(hash), None) => hash,
        (None, Some(passphrase)) => crypto::verify_hash(passphrase),
        (None, None) => {
            return Err(DiarySealError::ConfigError(format!(
                "verification hash missing at {}; run `diaryseal setup` first",
                stored_hash_path.display()
            )));
        }
    };

    // 3. Encrypt. The key is dropped (and zeroized) at the end of this block.
    let archive = {
        let key = source.into_key();
        package(records, &key)?
    };

    // 4. Publish.
    let archive_path = settings.archive_path(project_dir);
    let hash_path = settings.published_hash_path(project_dir);
    format::write_archive(&archive_path, &archive)?;
    format::write_hash_artifact(&hash_path, &verification_hash)?;

    Ok(BuildReport {
        count: archive.count,
        skipped,
        used_sample,
        archive_path,
        hash_path,
        verification_hash,
    })
}
