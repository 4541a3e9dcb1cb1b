//! Front-matter derivation and rendering.
//!
//! Each note gets a YAML front-matter block prepended at write time. Nothing
//! here is persisted on its own — the record is derived from the note's stem
//! and category path plus the run date, rendered, and discarded.
//!
//! ## Permalink rules
//!
//! - Root-level note (no category path): permalink is `/<title-slug>/` and
//!   no categories are emitted.
//! - Categorized note: permalink is the slugified category path followed by
//!   the title slug, e.g. `tech/rust-notes.md` → `/tech/rust-notes/`.
//! - Index note: when the immediate parent directory's slug equals the title
//!   slug (`tech/tech.md`), the trailing title segment is omitted so the
//!   note lands on the category page itself: `/tech/`.

use crate::naming::{humanize, slugify};
use crate::scan::Note;
use chrono::NaiveDate;

/// The five fields written ahead of every post.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub layout: String,
    pub title: String,
    pub date: NaiveDate,
    /// Slugified category segments; empty for root-level notes.
    pub categories: Vec<String>,
    pub permalink: String,
}

impl FrontMatter {
    /// Derive the front-matter record for a note.
    pub fn for_note(note: &Note, date: NaiveDate) -> FrontMatter {
        let title = humanize(&note.stem);
        let title_slug = slugify(&title);

        let (categories, permalink) = if note.categories.is_empty() {
            (Vec::new(), format!("/{}/", title_slug))
        } else {
            let slugs: Vec<String> = note.categories.iter().map(|c| slugify(c)).collect();
            let parent_slug = slugs.last().map(String::as_str).unwrap_or("");
            let permalink = if parent_slug == title_slug {
                format!("/{}/", slugs.join("/"))
            } else {
                format!("/{}/{}/", slugs.join("/"), title_slug)
            };
            (slugs, permalink)
        };

        FrontMatter {
            layout: "post".to_string(),
            title,
            date,
            categories,
            permalink,
        }
    }

    /// Render the block, including delimiters and the trailing blank line
    /// that separates it from the note content.
    pub fn render(&self) -> String {
        format!(
            "---\nlayout: {}\ntitle: \"{}\"\ndate: {}\ncategories: {}\npermalink: {}\n---\n\n",
            self.layout,
            self.title,
            self.date.format("%Y-%m-%d"),
            self.categories.join(" "),
            self.permalink,
        )
    }
}
