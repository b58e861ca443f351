/*!
 * Common test utilities for the docstub test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small but realistic anchor document
pub const SAMPLE_DOCUMENT: &str = "= Full Name\n:description: Canonical naming guidance\n\nThe full name of a concept is the name used in formal writing.\n";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample anchor document for testing
pub fn create_test_document(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_DOCUMENT)
}
