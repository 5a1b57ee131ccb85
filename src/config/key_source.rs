//! Where the build gets its key from.
//!
//! Lookup order, first non-empty value wins:
//! 1. `DIARY_ENCRYPTION_KEY` in the process environment (hex key, CI secret)
//! 2. `DIARY_PASSWORD` in the process environment (raw passphrase)
//! 3. the same two names in the project's `.env` file
//!
//! There is no fallback. A build without a key source fails.

use std::collections::HashMap;
use std::path::Path;

use zeroize::Zeroizing;

use crate::cli::env_parser::parse_env_file;
use crate::crypto::{self, DerivedKey};
use crate::errors::{DiarySealError, Result};

/// Environment variable holding the hex-encoded derived key.
pub const KEY_VAR: &str = "DIARY_ENCRYPTION_KEY";

/// Environment variable holding the raw passphrase.
pub const PASSWORD_VAR: &str = "DIARY_PASSWORD";

/// Dotenv file consulted after the process environment.
pub const ENV_FILE: &str = ".env";

/// A configured secret, not yet turned into a key.
pub enum KeySource {
    /// A ready-made key (already derived by `setup`).
    Key(DerivedKey),
    /// A passphrase that still has to go through the KDF.
    Passphrase(Zeroizing<String>),
}

impl KeySource {
    /// Resolve from the real process environment and `<project_dir>/.env`.
    pub fn resolve(project_dir: &Path) -> Result<Self> {
        Self::resolve_with(project_dir, |name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    pub fn resolve_with<F>(project_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = Self::from_vars(&lookup)? {
            return Ok(source);
        }

        let env_path = project_dir.join(ENV_FILE);
        if env_path.exists() {
            let vars: HashMap<String, String> = parse_env_file(&env_path)?;
            if let Some(source) = Self::from_vars(|name| vars.get(name).cloned())? {
                return Ok(source);
            }
        }

        Err(DiarySealError::ConfigError(format!(
            "no encryption key configured; set {KEY_VAR} (from `diaryseal setup`) or {PASSWORD_VAR}"
        )))
    }

    fn from_vars<F>(get: F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(hex) = get(KEY_VAR).map(Zeroizing::new) {
            if !hex.trim().is_empty() {
                return DerivedKey::from_hex(&hex).map(|k| Some(Self::Key(k)));
            }
        }

        if let Some(pw) = get(PASSWORD_VAR).map(Zeroizing::new) {
            if !pw.is_empty() {
                return Ok(Some(Self::Passphrase(pw)));
            }
        }

        Ok(None)
    }

    /// The raw passphrase, when that is what was configured.
    pub fn passphrase(&self) -> Option<&str> {
        match self {
            Self::Key(_) => None,
            Self::Passphrase(pw) => Some(pw.as_str()),
        }
    }

    /// Turn the source into the archive key, running the KDF if needed.
    pub fn into_key(self) -> DerivedKey {
        match self {
            Self::Key(key) => key,
            Self::Passphrase(pw) => crypto::derive(&pw),
        }
    }
}
