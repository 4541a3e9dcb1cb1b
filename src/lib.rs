//! # postprep
//!
//! A Jekyll content preprocessor. Your filesystem is the data source: a tree
//! of freeform markdown notes becomes dated posts with front-matter, and the
//! directory structure becomes a navigable category index.
//!
//! # Architecture: Scan Once, Derive Twice
//!
//! The source tree is walked exactly once, producing an in-memory manifest
//! that both outputs are derived from:
//!
//! ```text
//! 1. Scan        posts/    →  Manifest             (filesystem → structured data)
//! 2. Posts       manifest  →  _posts/*.md          (dated, front-matter-prefixed)
//! 3. Categories  manifest  →  _data/categories.yml (navigation index)
//! ```
//!
//! The two outputs never disagree about what the tree contains, and unit
//! tests can exercise either pass against a hand-built manifest without
//! touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the source tree, producing the manifest of notes and category paths |
//! | [`naming`] | Slug and title derivation shared by every emitted name |
//! | [`frontmatter`] | Front-matter records, permalink rules, YAML block rendering |
//! | [`posts`] | Writes renamed, metadata-prefixed posts to the flat output directory |
//! | [`categories`] | Builds the insertion-ordered category tree and writes the YAML index |
//! | [`output`] | CLI output formatting — pure `format_*` functions with `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Directory Structure Is the Metadata
//!
//! No per-note front-matter is read, ever. Title comes from the filename,
//! categories and permalink come from the directory path, and the date is
//! the run date. A note is just its content; everything else is derived.
//!
//! ## Insertion Order, Not Sorted Order
//!
//! The category index preserves the order in which the walk first
//! encountered each directory, rather than sorting names. Since the walk
//! itself visits entries in filename order, output is deterministic — but
//! the tree structure never reorders siblings on its own.
//!
//! ## Index Notes
//!
//! A note whose stem matches its parent directory (`tech/tech.md`) is that
//! category's landing page: its permalink drops the trailing title segment
//! so it renders at `/tech/` instead of `/tech/tech/`.

pub mod categories;
pub mod frontmatter;
pub mod naming;
pub mod output;
pub mod posts;
pub mod scan;
