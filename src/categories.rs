//! Category index construction.
//!
//! Pass 2 of the pipeline output. Every note's category path is inserted
//! into a nested tree (intermediate levels created as needed), and the tree
//! is serialized to a YAML file of `{name, url, children}` records for the
//! site generator's navigation.
//!
//! The tree is `Vec`-backed and keyed by raw directory name, so siblings
//! keep the order in which the walk first encountered them — insertion
//! order, never sorted. The tree depends only on directory structure, not
//! file content: two notes in the same directory contribute one node.

use crate::naming::{humanize, slugify};
use crate::scan::Manifest;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CategoriesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One entry in the serialized category index.
#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryRecord {
    /// Humanized directory name, e.g. `rust-lang` → "Rust Lang".
    pub name: String,
    /// Slug path from the root, no trailing slash, e.g. `/tech/databases`.
    pub url: String,
    /// Nested records in insertion order.
    pub children: Vec<CategoryRecord>,
}

/// Intermediate nested tree keyed by raw directory name.
#[derive(Debug, Default)]
struct CategoryNode {
    name: String,
    children: Vec<CategoryNode>,
}

impl CategoryNode {
    fn find_or_create(&mut self, name: &str) -> &mut CategoryNode {
        let idx = match self.children.iter().position(|c| c.name == name) {
            Some(i) => i,
            None => {
                self.children.push(CategoryNode {
                    name: name.to_string(),
                    children: Vec::new(),
                });
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }
}

/// Build the category index records from the manifest.
pub fn build_index(manifest: &Manifest) -> Vec<CategoryRecord> {
    let mut root = CategoryNode::default();
    for note in &manifest.notes {
        let mut node = &mut root;
        for category in &note.categories {
            node = node.find_or_create(category);
        }
    }
    format_records(&root.children, "")
}

fn format_records(nodes: &[CategoryNode], base_url: &str) -> Vec<CategoryRecord> {
    nodes
        .iter()
        .map(|node| {
            let url = format!("{}/{}", base_url, slugify(&node.name));
            let children = format_records(&node.children, &url);
            CategoryRecord {
                name: humanize(&node.name),
                url,
                children,
            }
        })
        .collect()
}

/// Serialize the category index to YAML at `path`, creating parent
/// directories as needed.
pub fn write_index(manifest: &Manifest, path: &Path) -> Result<Vec<CategoryRecord>, CategoriesError> {
    let records = build_index(manifest);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(&records)?;
    fs::write(path, yaml)?;
    Ok(records)
}
