//! The viewer-side unlock flow.
//!
//! A passphrase is checked against the published verification hash, then
//! re-derived into the archive key, which decrypts the archive and is
//! dropped straight away. Every failure collapses into
//! `UnlockError::IncorrectPassphrase`; callers cannot tell a hash mismatch
//! from a decryption failure.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use super::cipher::decrypt_records;
use super::format::EncryptedArchive;
use crate::crypto;
use crate::diary::DiaryRecord;
use crate::errors::{DiarySealError, Result};

/// Why an unlock attempt did not produce records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnlockError {
    #[error("Incorrect passphrase")]
    IncorrectPassphrase,

    /// Another attempt is still deriving; this one was not started.
    #[error("An unlock attempt is already in progress")]
    Busy,
}

impl From<UnlockError> for DiarySealError {
    fn from(e: UnlockError) -> Self {
        match e {
            UnlockError::IncorrectPassphrase => DiarySealError::IncorrectPassphrase,
            UnlockError::Busy => DiarySealError::CommandFailed(e.to_string()),
        }
    }
}

/// Try to open `archive` with `passphrase`.
///
/// Terminal on failure: there is no retry at this layer.
pub fn unlock(
    passphrase: &str,
    archive: &EncryptedArchive,
    stored_hash: &str,
) -> std::result::Result<Vec<DiaryRecord>, UnlockError> {
    open(passphrase, archive, stored_hash).map_err(|_| UnlockError::IncorrectPassphrase)
}

/// The two gated steps, with their distinct errors intact.
fn open(
    passphrase: &str,
    archive: &EncryptedArchive,
    stored_hash: &str,
) -> Result<Vec<DiaryRecord>> {
    if !crypto::check(passphrase, stored_hash) {
        return Err(DiarySealError::VerificationMismatch);
    }

    let key = crypto::derive(passphrase);
    decrypt_records(&archive.data, &key)
}

/// Single-flight guard around `unlock`.
///
/// Derivation is CPU-bound and slow on purpose, so a second submission
/// while one is running is refused with `Busy` instead of queuing
/// another derivation. The gate reopens when the running attempt ends,
/// whether it succeeded or not.
#[derive(Debug, Default)]
pub struct UnlockGate {
    in_flight: AtomicBool,
}

impl UnlockGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while an attempt is running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one unlock attempt unless another is already in flight.
    pub fn attempt(
        &self,
        passphrase: &str,
        archive: &EncryptedArchive,
        stored_hash: &str,
    ) -> std::result::Result<Vec<DiaryRecord>, UnlockError> {
        let _in_flight = self.acquire().ok_or(UnlockError::Busy)?;
        unlock(passphrase, archive, stored_hash)
    }

    fn acquire(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { gate: self })
    }
}

/// Releases the gate on drop, including on early return.
struct InFlight<'a> {
    gate: &'a UnlockGate,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}
