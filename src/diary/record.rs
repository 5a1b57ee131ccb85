//! The `DiaryRecord` type serialized into the encrypted archive.
//!
//! Field order in the struct is the field order in the JSON, and the
//! JSON is what gets encrypted, so reordering fields changes the payload
//! bytes (though not its meaning).

use serde::{Deserialize, Serialize};

/// One journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryRecord {
    /// Entry title (frontmatter `title:`, a `# Heading`, or the file stem).
    pub title: String,

    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,

    /// Markdown body with the frontmatter or heading removed.
    pub content: String,

    /// Optional tags from frontmatter `tags:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Name of the source file, when the entry came from disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl DiaryRecord {
    /// Convenience constructor for an entry without tags or filename.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            content: content.into(),
            tags: None,
            filename: None,
        }
    }
}

/// Sort records by date, newest first.
///
/// `YYYY-MM-DD` strings order the same lexically and chronologically.
/// The sort is stable, so entries sharing a date keep their input order.
pub fn sort_newest_first(records: &mut [DiaryRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
