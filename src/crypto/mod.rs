//! Cryptographic primitives for DiarySeal.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 passphrase key derivation (`kdf`)
//! - The zeroize-on-drop `DerivedKey` wrapper (`keys`)
//! - The SHA-256 passphrase verification hash (`verify`)
//! - AES-256-GCM encryption and decryption (`encryption`)
//!
//! The key and the verification hash come from two separate derivation
//! paths over the same passphrase; neither is computed from the other.

pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod verify;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive, verify_hash, check, DerivedKey, ...};
pub use encryption::{decrypt, encrypt};
pub use kdf::{derive, derive_with, KDF_ITERATIONS, KDF_SALT, KEY_LEN};
pub use keys::DerivedKey;
pub use verify::{check, verify_hash};
