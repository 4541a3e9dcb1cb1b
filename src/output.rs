//! CLI output formatting for all pipeline stages.
//!
//! Output is information-centric, not file-centric: each entity leads with
//! its positional index and title, with filesystem paths as indented
//! `Source:` context lines.
//!
//! ```text
//! Notes
//! 001 Rust Notes
//!     Source: tech/rust-notes.md
//!
//! Categories
//! 001 Tech → /tech
//!     001 Databases → /tech/databases
//!
//! Wrote 4 posts, 3 categories
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O.

use crate::categories::CategoryRecord;
use crate::naming::humanize;
use crate::posts::WrittenPost;
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format check/scan output: the discovered notes and their source paths.
pub fn format_check_output(manifest: &Manifest, source: &Path) -> Vec<String> {
    let mut lines = vec!["Notes".to_string()];
    for (i, note) in manifest.notes.iter().enumerate() {
        let rel = note
            .source_path
            .strip_prefix(source)
            .unwrap_or(&note.source_path);
        lines.push(format!("{} {}", format_index(i + 1), humanize(&note.stem)));
        lines.push(format!("    Source: {}", rel.display()));
    }
    lines.push(String::new());
    lines.push(format!(
        "Found {} notes in {} categories",
        manifest.notes.len(),
        manifest.category_path_count()
    ));
    lines
}

/// Format posts output: each written post as `title → output file`.
pub fn format_posts_output(written: &[WrittenPost]) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    for (i, post) in written.iter().enumerate() {
        let filename = post
            .output_path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_default();
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            post.front_matter.title,
            filename
        ));
        lines.push(format!("    Permalink: {}", post.front_matter.permalink));
    }
    lines.push(String::new());
    lines.push(format!("Wrote {} posts", written.len()));
    lines
}

/// Format categories output: the index tree with per-level indices.
pub fn format_categories_output(records: &[CategoryRecord], path: &Path) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    format_category_level(records, 0, &mut lines);
    lines.push(String::new());
    lines.push(format!(
        "Wrote {} top-level categories to {}",
        records.len(),
        path.display()
    ));
    lines
}

fn format_category_level(records: &[CategoryRecord], depth: usize, lines: &mut Vec<String>) {
    for (i, record) in records.iter().enumerate() {
        lines.push(format!(
            "{}{} {} \u{2192} {}",
            indent(depth),
            format_index(i + 1),
            record.name,
            record.url
        ));
        format_category_level(&record.children, depth + 1, lines);
    }
}

/// Print check output to stdout.
pub fn print_check_output(manifest: &Manifest, source: &Path) {
    for line in format_check_output(manifest, source) {
        println!("{}", line);
    }
}

/// Print posts output to stdout.
pub fn print_posts_output(written: &[WrittenPost]) {
    for line in format_posts_output(written) {
        println!("{}", line);
    }
}

/// Print categories output to stdout.
pub fn print_categories_output(records: &[CategoryRecord], path: &Path) {
    for line in format_categories_output(records, path) {
        println!("{}", line);
    }
}
