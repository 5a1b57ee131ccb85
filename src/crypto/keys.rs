//! The derived archive key.
//!
//! `DerivedKey` is not `Clone` and not serializable. A key lives for one
//! derive-then-use operation and its bytes are wiped on drop.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use super::kdf::KEY_LEN;
use crate::errors::{DiarySealError, Result};

/// A wrapper around a 32-byte archive key that automatically zeroes
/// its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Create a new `DerivedKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Parse a key from its hex text form (the `DIARY_ENCRYPTION_KEY` value).
    ///
    /// Surrounding whitespace is ignored. Anything that is not exactly
    /// 64 hex digits is a configuration error.
    pub fn from_hex(text: &str) -> Result<Self> {
        let decoded = Zeroizing::new(hex::decode(text.trim()).map_err(|e| {
            DiarySealError::ConfigError(format!("encryption key is not valid hex: {e}"))
        })?);

        if decoded.len() != KEY_LEN {
            return Err(DiarySealError::ConfigError(format!(
                "encryption key must be {} hex characters, got {}",
                KEY_LEN * 2,
                decoded.len() * 2
            )));
        }

        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self { bytes })
    }

    /// Lowercase hex text form, for handing the key to a CI secret store.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.bytes))
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}
