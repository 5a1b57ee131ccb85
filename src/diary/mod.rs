//! Diary module: plaintext journal entries.
//!
//! This module provides:
//! - The `DiaryRecord` type and its newest-first ordering (`record`)
//! - Markdown/frontmatter parsing and directory loading (`source`)

pub mod record;
pub mod source;

// Re-export the most commonly used items.
pub use record::{sort_newest_first, DiaryRecord};
pub use source::{load_dir, parse_entry, welcome_entry, LoadReport, SkippedFile};
