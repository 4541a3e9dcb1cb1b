//! Centralized slug and title derivation.
//!
//! Every name the preprocessor emits — post filenames, permalink segments,
//! category URLs, display titles — is derived from a filesystem name through
//! the two functions here, so the rules live in exactly one place.
//!
//! ## Rules
//!
//! - [`slugify`]: URL form. Characters outside word/whitespace/dash are
//!   dropped, spaces become dashes, result is lowercased.
//!   `"Rust Notes!"` → `"rust-notes"`
//! - [`humanize`]: display form. Dashes become spaces and each word is
//!   title-cased. `"rust-notes"` → `"Rust Notes"`

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that survive slugification: word chars, whitespace, dashes.
static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s-]").expect("slug filter regex is valid")
});

/// Convert a name to its URL slug: strip punctuation, spaces to dashes,
/// lowercase.
pub fn slugify(name: &str) -> String {
    NON_SLUG.replace_all(name, "").replace(' ', "-").to_lowercase()
}

/// Convert a filename stem to a display title: dashes to spaces, each word
/// title-cased.
pub fn humanize(stem: &str) -> String {
    let spaced = stem.replace('-', " ");
    let mut title = String::with_capacity(spaced.len());
    let mut prev_alpha = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            title.push(c);
            prev_alpha = false;
        }
    }
    title
}

/// Jekyll post filename: `<YYYY-MM-DD>-<slug>.md`.
pub fn jekyll_filename(date: NaiveDate, stem: &str) -> String {
    format!("{}-{}.md", date.format("%Y-%m-%d"), slugify(stem))
}
