//! Source tree scanning and manifest construction.
//!
//! Stage 1 of the postprep pipeline. Walks the source directory once and
//! produces a [`Manifest`] that both output passes (posts, category index)
//! consume — the tree is never traversed twice.
//!
//! ## Source layout
//!
//! ```text
//! posts/                       # Source root
//! ├── scratch.md               # Root-level note: no categories
//! ├── tech/                    # Each directory level is a category
//! │   ├── tech.md              # Index note (stem matches directory)
//! │   ├── rust-notes.md
//! │   └── databases/
//! │       └── postgres.md      # Category path: tech/databases
//! └── travel/
//!     └── japan.md
//! ```
//!
//! Only `.md` files are collected; everything else is ignored. A note's
//! category path is the sequence of directory names between the source root
//! and the file — empty for root-level notes.
//!
//! ## Ordering
//!
//! The walk visits entries in filename order, so the manifest — and
//! everything derived from it, including category tree insertion order —
//! is deterministic for a given source tree.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("source directory not found: {0}")]
    MissingSource(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub notes: Vec<Note>,
}

/// A markdown note discovered under the source root.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    /// Absolute-or-as-given path to the source file.
    pub source_path: PathBuf,
    /// Filename without the `.md` extension.
    pub stem: String,
    /// Directory names from the source root to the file. Empty for notes
    /// directly under the root.
    pub categories: Vec<String>,
}

impl Manifest {
    /// Number of distinct category paths that contain at least one note.
    pub fn category_path_count(&self) -> usize {
        let mut seen: Vec<&[String]> = Vec::new();
        for note in &self.notes {
            if note.categories.is_empty() {
                continue;
            }
            if !seen.contains(&note.categories.as_slice()) {
                seen.push(&note.categories);
            }
        }
        seen.len()
    }
}

pub fn scan(source: &Path) -> Result<Manifest, ScanError> {
    if !source.is_dir() {
        return Err(ScanError::MissingSource(source.to_path_buf()));
    }

    let mut notes = Vec::new();
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown(path) {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        // strip_prefix cannot fail: every entry is under `source`
        let rel = path.strip_prefix(source).unwrap_or(path);
        let categories: Vec<String> = rel
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default();

        notes.push(Note {
            source_path: path.to_path_buf(),
            stem,
            categories,
        });
    }

    Ok(Manifest { notes })
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
