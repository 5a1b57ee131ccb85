use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DiarySealError, Result};

/// Project-level configuration, loaded from `.diaryseal.toml`.
///
/// Every field has a sensible default so DiarySeal works out-of-the-box
/// without any config file at all. Secrets never live here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to project root) holding the markdown entries.
    #[serde(default = "default_diary_dir")]
    pub diary_dir: String,

    /// Directory the static site publishes as-is.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Directory holding the committed verification hash.
    #[serde(default = "default_keys_dir")]
    pub keys_dir: String,

    /// File name of the encrypted archive inside `public_dir`.
    #[serde(default = "default_archive_file")]
    pub archive_file: String,

    /// File name of the verification hash (in `keys_dir` and `public_dir`).
    #[serde(default = "default_hash_file")]
    pub hash_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_diary_dir() -> String {
    "diary".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_keys_dir() -> String {
    "keys".to_string()
}

fn default_archive_file() -> String {
    "diary-data.json".to_string()
}

fn default_hash_file() -> String {
    "passphrase-hash.txt".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            diary_dir: default_diary_dir(),
            public_dir: default_public_dir(),
            keys_dir: default_keys_dir(),
            archive_file: default_archive_file(),
            hash_file: default_hash_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".diaryseal.toml";

    /// Load settings from `<project_dir>/.diaryseal.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            DiarySealError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// `project_dir/diary`
    pub fn diary_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.diary_dir)
    }

    /// `project_dir/public/diary-data.json`
    pub fn archive_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.public_dir).join(&self.archive_file)
    }

    /// `project_dir/keys/passphrase-hash.txt` (committed source copy).
    pub fn hash_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.keys_dir).join(&self.hash_file)
    }

    /// `project_dir/public/passphrase-hash.txt` (published copy).
    pub fn published_hash_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.public_dir).join(&self.hash_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
