//! Integration tests for the DiarySeal crypto module.

use diaryseal::crypto::{
    check, decrypt, derive, derive_with, encrypt, verify_hash, DerivedKey, KDF_ITERATIONS,
    KDF_SALT,
};

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

#[test]
fn derive_matches_fixed_vector() {
    let key = derive("correct-horse");
    assert_eq!(
        key.to_hex().as_str(),
        "33eebd18d475c202ad9cb57182b13ab9c5778c03bab72eeefa7bdaf6883d53b9"
    );
}

#[test]
fn derive_is_deterministic_and_uses_protocol_constants() {
    let a = derive("correct-horse");
    let b = derive("correct-horse");
    assert_eq!(a.as_bytes(), b.as_bytes());

    let raw = derive_with(b"correct-horse", KDF_SALT.as_bytes(), KDF_ITERATIONS);
    assert_eq!(a.as_bytes(), &raw);
}

#[test]
fn different_passphrases_give_different_keys() {
    assert_ne!(derive("correct-horse").as_bytes(), derive("correct-horsE").as_bytes());
}

#[test]
fn hex_key_parses_back_to_same_key() {
    let key = derive("correct-horse");
    let parsed = DerivedKey::from_hex(&key.to_hex()).expect("valid hex");
    assert_eq!(parsed.as_bytes(), key.as_bytes());
}

// ---------------------------------------------------------------------------
// Verification hash
// ---------------------------------------------------------------------------

#[test]
fn verify_hash_is_plain_sha256_hex() {
    assert_eq!(
        verify_hash("correct-horse"),
        "9dca666eb54730714630d1519264a7bf1eeaad00b8f2edc90d3ecbfad928d163"
    );
}

#[test]
fn verify_hash_is_not_the_key() {
    let hash = verify_hash("correct-horse");
    let key = derive("correct-horse");
    assert_ne!(hash.as_str(), key.to_hex().as_str());
}

#[test]
fn check_accepts_only_the_right_passphrase() {
    let hash = verify_hash("correct-horse");
    assert!(check("correct-horse", &hash));
    assert!(check("correct-horse", &format!("{hash}\n")));
    assert!(!check("wrong-pass", &hash));
    assert!(!check("correct-horse", ""));
}

// ---------------------------------------------------------------------------
// Bulk cipher
// ---------------------------------------------------------------------------

#[test]
fn ciphertext_differs_each_time_but_opens_the_same() {
    let key = derive("correct-horse");
    let plaintext = b"Dear diary, today was fine.";

    let ct1 = encrypt(&key, plaintext).expect("encrypt 1");
    let ct2 = encrypt(&key, plaintext).expect("encrypt 2");
    assert_ne!(ct1, ct2, "fresh nonce per encryption");

    assert_eq!(decrypt(&key, &ct1).expect("decrypt 1"), plaintext);
    assert_eq!(decrypt(&key, &ct2).expect("decrypt 2"), plaintext);
}

#[test]
fn wrong_key_is_rejected() {
    let ct = encrypt(&derive("correct-horse"), b"secret").expect("encrypt");
    assert!(decrypt(&derive("wrong-pass"), &ct).is_err());
}

#[test]
fn tampered_ciphertext_is_rejected() {
    let key = derive("correct-horse");
    let mut ct = encrypt(&key, b"secret entry").expect("encrypt");
    let last = ct.len() - 1;
    ct[last] ^= 0x01;
    assert!(decrypt(&key, &ct).is_err());
}

#[test]
fn truncated_ciphertext_is_rejected() {
    let key = derive("correct-horse");
    let ct = encrypt(&key, b"secret entry").expect("encrypt");
    assert!(decrypt(&key, &ct[..ct.len() - 1]).is_err());
    assert!(decrypt(&key, &ct[..8]).is_err());
    assert!(decrypt(&key, &[]).is_err());
}
