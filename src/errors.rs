use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in DiarySeal.
#[derive(Debug, Error)]
pub enum DiarySealError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong key, tampered or truncated ciphertext, or plaintext that is
    /// not a well-formed record collection.
    #[error("Decryption failed: wrong key or corrupted archive")]
    DecryptionFailed,

    #[error("Passphrase does not match the stored verification hash")]
    VerificationMismatch,

    /// What a viewer sees for any failed unlock, whatever the cause.
    #[error("Incorrect passphrase")]
    IncorrectPassphrase,

    // --- Config errors ---
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // --- Source errors ---
    #[error("Malformed diary entry '{file}': {reason}")]
    MalformedSource { file: String, reason: String },

    // --- Artifact errors ---
    #[error("Artifact not found at {0}")]
    ArtifactNotFound(PathBuf),

    #[error("Invalid archive format: {0}")]
    InvalidArchiveFormat(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("git {command} failed: {detail}")]
    GitFailed { command: String, detail: String },
}

/// Convenience type alias for DiarySeal results.
pub type Result<T> = std::result::Result<T, DiarySealError>;
