//! On-disk artifacts published with the site.
//!
//! Two files are produced on every build:
//!
//! ```text
//! public/diary-data.json       {"data": "<base64>", "timestamp": "...", "count": N, "version": "1"}
//! public/passphrase-hash.txt   <64 lowercase hex chars, no newline>
//! ```
//!
//! Both are rewritten wholesale; nothing is ever patched in place.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DiarySealError, Result};

/// Archive protocol version written into every archive.
///
/// Bump this whenever the KDF parameters, cipher, or payload encoding change.
pub const FORMAT_VERSION: &str = "1";

/// Length of a hex-encoded SHA-256 digest.
const HASH_HEX_LEN: usize = 64;

/// The encrypted archive artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedArchive {
    /// Bulk cipher output for the whole record collection.
    pub data: String,

    /// When the archive was built.
    pub timestamp: DateTime<Utc>,

    /// Number of records inside `data`.
    pub count: usize,

    /// Protocol version (see `FORMAT_VERSION`).
    pub version: String,
}

impl EncryptedArchive {
    /// Fail early on archives written by an incompatible protocol.
    pub fn ensure_supported(&self) -> Result<()> {
        if self.version != FORMAT_VERSION {
            return Err(DiarySealError::InvalidArchiveFormat(format!(
                "unsupported version '{}', expected '{FORMAT_VERSION}'",
                self.version
            )));
        }
        Ok(())
    }
}

/// Write the archive JSON **atomically**.
pub fn write_archive(path: &Path, archive: &EncryptedArchive) -> Result<()> {
    let bytes = serde_json::to_vec(archive)
        .map_err(|e| DiarySealError::SerializationError(format!("archive: {e}")))?;
    write_atomic(path, &bytes)
}

/// Read and parse an archive JSON file.
pub fn read_archive(path: &Path) -> Result<EncryptedArchive> {
    if !path.exists() {
        return Err(DiarySealError::ArtifactNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;
    serde_json::from_slice(&data)
        .map_err(|e| DiarySealError::InvalidArchiveFormat(format!("archive JSON: {e}")))
}

/// Write the verification hash artifact: the hex string and nothing else.
pub fn write_hash_artifact(path: &Path, hash: &str) -> Result<()> {
    write_atomic(path, hash.as_bytes())
}

/// Read the verification hash artifact.
///
/// Surrounding whitespace is dropped; anything other than a 64-digit
/// lowercase hex string is rejected.
pub fn read_hash_artifact(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DiarySealError::ArtifactNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let hash = text.trim();

    let valid = hash.len() == HASH_HEX_LEN
        && hash
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !valid {
        return Err(DiarySealError::InvalidArchiveFormat(format!(
            "{} does not contain a hex SHA-256 hash",
            path.display()
        )));
    }

    Ok(hash.to_string())
}

/// Write `bytes` to `path` via a temp file + rename, creating parent
/// directories as needed.
///
/// The temp file is in the same directory so the rename stays on one
/// filesystem and readers never see a half-written artifact.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
