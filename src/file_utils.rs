use anyhow::{Context, Result};
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::language_utils;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a translated document
    // @params: input_file, output_dir, target_language, extension
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        target_language: &str,
        extension: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();

        // Insert the language code between stem and extension
        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(target_language);
        output_filename.push('.');
        output_filename.push_str(extension);

        output_dir.join(output_filename)
    }

    /// Check whether a filename already carries a translation infix
    /// (a recognized language code between stem and extension, as in
    /// `concept.de.adoc`).
    pub fn is_translated_output<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();

        let Some(stem) = path.file_stem() else {
            return false;
        };

        // The infix shows up as the extension of the stem: `concept.de`
        match Path::new(stem).extension() {
            Some(infix) => language_utils::is_language_code(&infix.to_string_lossy()),
            None => false,
        }
    }

    /// Find source documents with the given extension in a directory.
    ///
    /// Files that are themselves translated outputs are excluded, so
    /// translations are never re-translated. Results are sorted by path
    /// for deterministic processing order.
    pub fn find_source_documents<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let normalized_ext = extension.trim_start_matches('.');

        let mut result = Vec::new();
        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Some(ext) = path.extension() else {
                continue;
            };
            if !ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                continue;
            }

            if Self::is_translated_output(path) {
                continue;
            }

            result.push(path.to_path_buf());
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Write a string to a file only if the file does not exist yet.
    ///
    /// Returns `Ok(true)` when the file was created and `Ok(false)` when it
    /// already existed. Creation uses `create_new`, so two concurrent runs
    /// cannot both write the same destination: the loser of the race observes
    /// the already-exists condition.
    pub fn write_new<P: AsRef<Path>>(path: P, content: &str) -> Result<bool> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                file.write_all(content.as_bytes())
                    .with_context(|| format!("Failed to write to file: {:?}", path))?;
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to create file: {:?}", path))
            }
        }
    }
}
