//! Fixtures shared by the scopeseq test suites.

use std::path::PathBuf;

use scopeseq_common::catalog::SubjectEntry;
use tempfile::TempDir;

pub use pretty_assertions;

/// The sample catalog shipped in `data/`. Three subjects: maths (stages 4-6),
/// science (stages 4-5, with overflowing, underflowing and zero-week units)
/// and english (years 11-12).
pub const SAMPLE_CATALOG: &str = include_str!("../../../data/curriculum-data.json");

/// Parse one subject's raw entry out of the sample catalog.
pub fn sample_entry(subject_id: &str) -> SubjectEntry {
    let mut raw: serde_json::Value =
        serde_json::from_str(SAMPLE_CATALOG).expect("sample catalog is valid JSON");
    let entry = raw
        .get_mut(subject_id)
        .unwrap_or_else(|| panic!("sample catalog has no subject {subject_id}"))
        .take();
    serde_json::from_value(entry).expect("sample entry matches the catalog schema")
}

/// A temporary directory holding `curriculum-data.json` with `content`.
/// Keep the `TempDir` alive for as long as the file is needed.
pub fn catalog_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("curriculum-data.json");
    std::fs::write(&path, content).expect("write catalog fixture");
    (dir, path)
}

/// Same as [`catalog_file`] with the sample catalog.
pub fn sample_catalog_file() -> (TempDir, PathBuf) {
    catalog_file(SAMPLE_CATALOG)
}
