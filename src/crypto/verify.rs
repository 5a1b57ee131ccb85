//! Passphrase verification hash.
//!
//! `verify_hash` is a single unsalted SHA-256 over the raw passphrase.
//! It never feeds into the archive key, which comes from PBKDF2 with its
//! own salt and iteration count.
//!
//! The hash is published next to the archive and is far cheaper to brute
//! force than the KDF, so it bounds the effective strength of the whole
//! scheme. It exists for early feedback in the viewer only.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Hex-encoded SHA-256 of `passphrase`.
pub fn verify_hash(passphrase: &str) -> String {
    hex::encode(Sha256::digest(passphrase.as_bytes()))
}

/// Check `passphrase` against a stored verification hash.
///
/// Exact match only. Whitespace around the stored value (a trailing
/// newline from an editor, say) is ignored; case is not.
pub fn check(passphrase: &str, stored_hash: &str) -> bool {
    let actual = verify_hash(passphrase);

    // Use constant-time comparison to avoid timing side channels.
    actual
        .as_bytes()
        .ct_eq(stored_hash.trim().as_bytes())
        .into()
}
