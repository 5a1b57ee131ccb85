//! Minimal `.env` file parsing.
//!
//! The build reads `DIARY_ENCRYPTION_KEY` / `DIARY_PASSWORD` from a local
//! `.env` when they are not set in the process environment.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::{DiarySealError, Result};

/// Parse a single `.env` line into a (key, value) pair.
///
/// Returns `None` for blank lines, comments, and lines without `=`.
/// Handles: `export` prefix, double/single quotes, values with `=`.
pub fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);

    let (key, value) = trimmed.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);

    if key.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse `.env` text into a key-value map. Later lines win.
pub fn parse_env_str(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .filter_map(parse_env_line)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Read and parse a `.env` file.
pub fn parse_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        DiarySealError::ConfigError(format!("failed to read {}: {e}", path.display()))
    })?;

    Ok(parse_env_str(&content))
}
