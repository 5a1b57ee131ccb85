//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::diary::DiaryRecord;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a summary table of entries (Date, Title, Tags, Words).
pub fn print_records_table(records: &[DiaryRecord]) {
    if records.is_empty() {
        info("The archive contains no entries.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Title", "Tags", "Words"]);

    for r in records {
        table.add_row(vec![
            r.date.clone(),
            r.title.clone(),
            tags_label(r),
            r.content.split_whitespace().count().to_string(),
        ]);
    }

    println!("{table}");
}

/// Print every entry in full, newest first.
pub fn print_records_full(records: &[DiaryRecord]) {
    for (i, r) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", style(&r.date).dim(), style(&r.title).bold());
        let tags = tags_label(r);
        if !tags.is_empty() {
            println!("{}", style(tags).cyan());
        }
        println!();
        println!("{}", r.content);
    }
}

fn tags_label(record: &DiaryRecord) -> String {
    record
        .tags
        .as_deref()
        .map(|t| t.join(", "))
        .unwrap_or_default()
}
