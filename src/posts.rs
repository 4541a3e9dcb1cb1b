//! Post writing.
//!
//! Pass 1 of the pipeline output. For every note in the manifest, reads the
//! source content, prepends the rendered front-matter block, and writes the
//! result to `<output>/<YYYY-MM-DD>-<slug>.md`. The output directory is
//! flat; notes that slugify to the same name on the same day silently
//! overwrite each other. Writes are not atomic — a failure mid-write leaves
//! a truncated file and aborts the pass.

use crate::frontmatter::FrontMatter;
use crate::naming::jekyll_filename;
use crate::scan::Manifest;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One post produced by [`write_posts`], for reporting.
#[derive(Debug)]
pub struct WrittenPost {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub front_matter: FrontMatter,
}

/// Write every manifest note as a dated, front-matter-prefixed post.
///
/// Returns the written posts in manifest order.
pub fn write_posts(
    manifest: &Manifest,
    output: &Path,
    date: NaiveDate,
) -> Result<Vec<WrittenPost>, PostsError> {
    fs::create_dir_all(output)?;

    let mut written = Vec::with_capacity(manifest.notes.len());
    for note in &manifest.notes {
        let front_matter = FrontMatter::for_note(note, date);
        let output_path = output.join(jekyll_filename(date, &note.stem));

        let content = fs::read_to_string(&note.source_path)?;
        let mut post = front_matter.render();
        post.push_str(&content);
        fs::write(&output_path, post)?;

        written.push(WrittenPost {
            source_path: note.source_path.clone(),
            output_path,
            front_matter,
        });
    }

    Ok(written)
}
