//! Passphrase-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The build tooling and the viewer derive the archive key independently
//! from the same passphrase, so every parameter here is part of the
//! archive protocol. Changing any of them (salt, iteration count, output
//! length, or hash) makes every previously built archive undecryptable,
//! and the only symptom is "wrong passphrase".
//!
//! The salt is fixed for the whole deployment.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use super::keys::DerivedKey;

/// Salt mixed into every derivation (UTF-8 bytes of this string).
pub const KDF_SALT: &str = "diary-encryption-salt-2025";

/// PBKDF2 iteration count.
pub const KDF_ITERATIONS: u32 = 100_000;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Derive the archive key for `passphrase`.
///
/// Pure and deterministic: any string is accepted, including the empty
/// string. Length rules belong to the setup flow, not to this function.
pub fn derive(passphrase: &str) -> DerivedKey {
    DerivedKey::new(derive_with(
        passphrase.as_bytes(),
        KDF_SALT.as_bytes(),
        KDF_ITERATIONS,
    ))
}

/// Run PBKDF2-HMAC-SHA256 with explicit parameters.
///
/// `derive` is this function with the protocol constants plugged in.
pub fn derive_with(passphrase: &[u8], salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut output = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase, salt, iterations, &mut output);
    output
}
