//! Bulk encryption of the diary record collection.
//!
//! The collection is serialized to JSON, encrypted as a single unit with
//! AES-256-GCM, and base64-encoded so it can sit in a JSON string field:
//!
//! ```text
//! base64( nonce(12) || AES-256-GCM(json(records)) || tag(16) )
//! ```

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroizing;

use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::DerivedKey;
use crate::diary::DiaryRecord;
use crate::errors::{DiarySealError, Result};

/// Serialize and encrypt `records` under `key`.
///
/// Records are encrypted in the order given; ordering is the packager's job.
pub fn encrypt_records(records: &[DiaryRecord], key: &DerivedKey) -> Result<String> {
    let json = Zeroizing::new(
        serde_json::to_vec(records)
            .map_err(|e| DiarySealError::SerializationError(format!("records: {e}")))?,
    );

    let blob = encrypt(key, &json)?;
    Ok(BASE64.encode(blob))
}

/// Decrypt and deserialize a ciphertext produced by `encrypt_records`.
///
/// Bad base64, a failed auth tag, and plaintext that is not a record
/// collection all map to `DecryptionFailed`.
pub fn decrypt_records(ciphertext: &str, key: &DerivedKey) -> Result<Vec<DiaryRecord>> {
    let blob = BASE64
        .decode(ciphertext.trim())
        .map_err(|_| DiarySealError::DecryptionFailed)?;

    let json = Zeroizing::new(decrypt(key, &blob)?);

    serde_json::from_slice(&json).map_err(|_| DiarySealError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> DerivedKey {
        DerivedKey::new([byte; 32])
    }

    #[test]
    fn roundtrip_preserves_every_field() {
        let records = vec![
            DiaryRecord {
                tags: Some(vec!["a".into(), "b".into()]),
                filename: Some("2024-01-02-x.md".into()),
                ..DiaryRecord::new("Second", "2024-01-02", "line 1\nline 2 — ünïcode")
            },
            DiaryRecord::new("First", "2024-01-01", ""),
        ];

        let ct = encrypt_records(&records, &key(7)).unwrap();
        let back = decrypt_records(&ct, &key(7)).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn empty_collection_roundtrips() {
        let ct = encrypt_records(&[], &key(1)).unwrap();
        assert!(decrypt_records(&ct, &key(1)).unwrap().is_empty());
    }

    #[test]
    fn invalid_base64_is_decryption_failure() {
        let err = decrypt_records("not base64 !!", &key(1)).unwrap_err();
        assert!(matches!(err, DiarySealError::DecryptionFailed));
    }

    #[test]
    fn well_formed_ciphertext_of_non_records_is_rejected() {
        // Authenticates fine, but the plaintext is not a record collection.
        let blob = encrypt(&key(9), br#"{"hello":"world"}"#).unwrap();
        let err = decrypt_records(&BASE64.encode(blob), &key(9)).unwrap_err();
        assert!(matches!(err, DiarySealError::DecryptionFailed));
    }
}
