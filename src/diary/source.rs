//! Markdown diary source parsing.
//!
//! Three entry shapes are accepted:
//!
//! ```text
//! ---                       # Title              Plain body text...
//! title: "A day"            body...
//! date: 2024-01-01
//! tags: [life, work]
//! ---
//! body...
//! ```
//!
//! The date comes from frontmatter when present, then from a
//! `YYYY-MM-DD` filename prefix, then from today's date.
//!
//! A file that cannot be read or parsed is skipped and reported; it never
//! aborts the rest of the batch.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};

use super::record::{sort_newest_first, DiaryRecord};
use crate::errors::{DiarySealError, Result};

/// Frontmatter delimiter line.
const FRONTMATTER_FENCE: &str = "---";

/// Extension of diary source files.
const ENTRY_EXTENSION: &str = "md";

/// A source file that was left out of the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Result of loading a diary directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Parsed entries, newest first.
    pub records: Vec<DiaryRecord>,
    /// Files that were skipped, in filename order.
    pub skipped: Vec<SkippedFile>,
}

/// Parse one markdown entry, resolving a missing date to today.
pub fn parse_entry(filename: &str, text: &str) -> Result<DiaryRecord> {
    parse_entry_on(filename, text, Local::now().date_naive())
}

/// Parse one markdown entry with an explicit fallback date.
pub fn parse_entry_on(filename: &str, text: &str, today: NaiveDate) -> Result<DiaryRecord> {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();

    let mut title = None;
    let mut date = None;
    let mut tags = None;
    let content;

    if first.trim_end() == FRONTMATTER_FENCE {
        let mut closed = false;
        for line in lines.by_ref() {
            if line.trim_end() == FRONTMATTER_FENCE {
                closed = true;
                break;
            }
            if let Some(value) = line.strip_prefix("title:") {
                title = Some(strip_quotes(value));
            } else if let Some(value) = line.strip_prefix("date:") {
                date = Some(strip_quotes(value));
            } else if let Some(value) = line.strip_prefix("tags:") {
                tags = parse_tags(value);
            }
        }
        if !closed {
            return Err(malformed(filename, "frontmatter block is never closed"));
        }
        content = join_trimmed(lines);
    } else if let Some(heading) = first.strip_prefix("# ") {
        title = Some(heading.trim().to_string());
        content = join_trimmed(lines);
    } else {
        content = text.trim().to_string();
    }

    let date = match date.filter(|d| !d.is_empty()) {
        Some(d) => {
            if !is_calendar_date(&d) {
                return Err(malformed(
                    filename,
                    &format!("date '{d}' is not a valid YYYY-MM-DD date"),
                ));
            }
            d
        }
        None => date_from_filename(filename)
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
    };

    let title = title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| file_stem(filename).to_string());

    Ok(DiaryRecord {
        title,
        date,
        content,
        tags,
        filename: Some(filename.to_string()),
    })
}

/// Load every `*.md` file in `dir`.
///
/// Files are visited in filename order so the output does not depend on
/// directory enumeration order. Unreadable or malformed files land in
/// `LoadReport::skipped`.
pub fn load_dir(dir: &Path) -> Result<LoadReport> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut report = LoadReport::default();
    for path in paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let parsed = fs::read_to_string(&path)
            .map_err(DiarySealError::from)
            .and_then(|text| parse_entry(&filename, &text));

        match parsed {
            Ok(record) => report.records.push(record),
            Err(DiarySealError::MalformedSource { reason, .. }) => {
                report.skipped.push(SkippedFile { filename, reason });
            }
            Err(e) => report.skipped.push(SkippedFile {
                filename,
                reason: e.to_string(),
            }),
        }
    }

    sort_newest_first(&mut report.records);
    Ok(report)
}

/// The placeholder entry used when no diary directory exists yet.
pub fn welcome_entry(today: NaiveDate) -> DiaryRecord {
    DiaryRecord {
        title: "Welcome to your encrypted diary".to_string(),
        date: today.format("%Y-%m-%d").to_string(),
        content: "This is a sample entry.\n\n\
                  Put your markdown diary files in the diary directory. \
                  Every build encrypts them and bundles them into the site."
            .to_string(),
        tags: Some(vec!["sample".to_string(), "welcome".to_string()]),
        filename: None,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn malformed(filename: &str, reason: &str) -> DiarySealError {
    DiarySealError::MalformedSource {
        file: filename.to_string(),
        reason: reason.to_string(),
    }
}

/// Trim a frontmatter value and drop any quote characters.
fn strip_quotes(value: &str) -> String {
    value.trim().replace(['"', '\''], "")
}

/// Parse `a, b` or `[a, "b"]` into a tag list; `None` when empty.
fn parse_tags(value: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = value
        .trim()
        .replace(['[', ']'], "")
        .split(',')
        .map(strip_quotes)
        .filter(|t| !t.is_empty())
        .collect();

    (!tags.is_empty()).then_some(tags)
}

fn join_trimmed<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.collect::<Vec<_>>().join("\n").trim().to_string()
}

/// `true` for an exact `YYYY-MM-DD` string naming a real calendar day.
fn is_calendar_date(s: &str) -> bool {
    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b
            .iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());

    shape_ok && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Take the date from a `YYYY-MM-DD-title.md` style filename.
fn date_from_filename(filename: &str) -> Option<String> {
    let prefix = filename.get(..10)?;
    is_calendar_date(prefix).then(|| prefix.to_string())
}

fn file_stem(filename: &str) -> &str {
    filename.strip_suffix(".md").unwrap_or(filename)
}
