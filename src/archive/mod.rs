//! Archive module: the encrypted artifact shipped to the site.
//!
//! This module provides:
//! - Record collection encryption and decryption (`cipher`)
//! - The archive JSON and verification-hash artifacts on disk (`format`)
//! - The build-time packager (`packager`)
//! - The passphrase unlock flow used by viewers (`unlock`)

pub mod cipher;
pub mod format;
pub mod packager;
pub mod unlock;

// Re-export the most commonly used items.
pub use cipher::{decrypt_records, encrypt_records};
pub use format::{EncryptedArchive, FORMAT_VERSION};
pub use packager::{build, package, BuildReport};
pub use unlock::{unlock, UnlockError, UnlockGate};
