/*!
 * Error types for the docstub application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The documentation source directory does not exist
    #[error("Documentation directory not found: {path}")]
    DirectoryNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Read or write failure on an individual document
    #[error("File access error on {path}: {message}")]
    FileAccess {
        /// Path of the affected document
        path: PathBuf,
        /// Underlying failure description
        message: String,
    },

    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Classify an arbitrary failure on a specific file as a `FileAccess` error
    pub fn file_access<P: AsRef<Path>, E: Display>(path: P, error: E) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            message: error.to_string(),
        }
    }
}

// Utility conversions for error propagation
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
