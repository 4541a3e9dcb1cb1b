//! Full-pipeline tests: scan a real source tree, write both outputs, and
//! check the end-to-end guarantees.

use chrono::NaiveDate;
use postprep::{categories, posts, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_source() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let tech = tmp.path().join("tech");
    let databases = tech.join("databases");
    let travel = tmp.path().join("travel");
    fs::create_dir_all(&databases).unwrap();
    fs::create_dir_all(&travel).unwrap();

    fs::write(tech.join("rust-notes.md"), "# Rust\n\nNotes on rust.\n").unwrap();
    fs::write(tech.join("tech.md"), "# Tech\n\nCategory landing page.\n").unwrap();
    fs::write(databases.join("postgres.md"), "# Postgres\n").unwrap();
    fs::write(travel.join("japan.md"), "# Japan\n").unwrap();
    fs::write(tmp.path().join("scratch.md"), "loose thoughts\n").unwrap();
    tmp
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

fn build(source: &Path, out: &Path, categories_file: &Path, date: NaiveDate) {
    let manifest = scan::scan(source).unwrap();
    posts::write_posts(&manifest, out, date).unwrap();
    categories::write_index(&manifest, categories_file).unwrap();
}

/// Split a generated post into its front-matter mapping and body.
fn parse_post(content: &str) -> (serde_yaml::Value, String) {
    let rest = content.strip_prefix("---\n").unwrap();
    let (block, body) = rest.split_once("\n---\n\n").unwrap();
    let parsed: serde_yaml::Value = serde_yaml::from_str(block).unwrap();
    assert!(parsed.is_mapping());
    (parsed, body.to_string())
}

#[test]
fn one_output_file_per_input_file() {
    let src = setup_source();
    let out = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    build(src.path(), out.path(), &data.path().join("categories.yml"), run_date());

    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 5);
}

#[test]
fn front_matter_has_five_fields_and_content_is_verbatim() {
    let src = setup_source();
    let out = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    build(src.path(), out.path(), &data.path().join("categories.yml"), run_date());

    let post = fs::read_to_string(out.path().join("2024-03-09-rust-notes.md")).unwrap();
    let (fm, body) = parse_post(&post);

    assert_eq!(fm.as_mapping().unwrap().len(), 5);
    assert_eq!(fm["layout"], "post");
    assert_eq!(fm["title"], "Rust Notes");
    assert_eq!(fm["date"], "2024-03-09");
    assert_eq!(fm["categories"], "tech");
    assert_eq!(fm["permalink"], "/tech/rust-notes/");
    assert_eq!(body, "# Rust\n\nNotes on rust.\n");
}

#[test]
fn index_note_permalink_drops_title_segment() {
    let src = setup_source();
    let out = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    build(src.path(), out.path(), &data.path().join("categories.yml"), run_date());

    let post = fs::read_to_string(out.path().join("2024-03-09-tech.md")).unwrap();
    let (fm, _) = parse_post(&post);
    assert_eq!(fm["permalink"], "/tech/");
}

#[test]
fn root_level_note_permalink_is_slug_only() {
    let src = setup_source();
    let out = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    build(src.path(), out.path(), &data.path().join("categories.yml"), run_date());

    let post = fs::read_to_string(out.path().join("2024-03-09-scratch.md")).unwrap();
    let (fm, _) = parse_post(&post);
    assert_eq!(fm["permalink"], "/scratch/");
    // No categories for root-level notes
    assert!(fm["categories"].is_null() || fm["categories"] == "");
}

#[test]
fn category_index_leaf_count_matches_note_dirs() {
    let src = setup_source();
    let out = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let yml = data.path().join("categories.yml");
    build(src.path(), out.path(), &yml, run_date());

    let parsed: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&yml).unwrap()).unwrap();
    let seq = parsed.as_sequence().unwrap();

    fn leaves(value: &serde_yaml::Value) -> usize {
        let children = value["children"].as_sequence().unwrap();
        if children.is_empty() {
            1
        } else {
            children.iter().map(leaves).sum()
        }
    }
    // Distinct note-bearing directory paths: tech/databases and travel are
    // the only leaves (tech itself has a child).
    let total: usize = seq.iter().map(leaves).sum();
    assert_eq!(total, 2);

    // Top-level structure: tech (with databases child) and travel
    assert_eq!(seq.len(), 2);
    assert_eq!(seq[0]["name"], "Tech");
    assert_eq!(seq[0]["url"], "/tech");
    assert_eq!(seq[0]["children"][0]["name"], "Databases");
    assert_eq!(seq[1]["name"], "Travel");
    assert_eq!(seq[1]["children"].as_sequence().unwrap().len(), 0);
}

#[test]
fn rerun_is_idempotent_modulo_date() {
    let src = setup_source();

    let out_a = TempDir::new().unwrap();
    let data_a = TempDir::new().unwrap();
    build(
        src.path(),
        out_a.path(),
        &data_a.path().join("categories.yml"),
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
    );

    let out_b = TempDir::new().unwrap();
    let data_b = TempDir::new().unwrap();
    build(
        src.path(),
        out_b.path(),
        &data_b.path().join("categories.yml"),
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
    );

    // Category index is byte-identical; posts differ only in date.
    assert_eq!(
        fs::read_to_string(data_a.path().join("categories.yml")).unwrap(),
        fs::read_to_string(data_b.path().join("categories.yml")).unwrap()
    );

    let a = fs::read_to_string(out_a.path().join("2024-03-09-rust-notes.md")).unwrap();
    let b = fs::read_to_string(out_b.path().join("2024-04-01-rust-notes.md")).unwrap();
    assert_eq!(
        a.replace("2024-03-09", "DATE"),
        b.replace("2024-04-01", "DATE")
    );
}

#[test]
fn overwrites_existing_outputs() {
    let src = setup_source();
    let out = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let yml = data.path().join("categories.yml");

    build(src.path(), out.path(), &yml, run_date());
    fs::write(out.path().join("2024-03-09-japan.md"), "stale").unwrap();
    build(src.path(), out.path(), &yml, run_date());

    let post = fs::read_to_string(out.path().join("2024-03-09-japan.md")).unwrap();
    assert!(post.ends_with("# Japan\n"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 5);
}
