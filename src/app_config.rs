use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// File extension of source documents
    #[serde(default = "default_document_extension")]
    pub document_extension: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "de".to_string()
}

fn default_document_extension() -> String {
    "adoc".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        language_utils::validate_language_code(&self.source_language)?;
        language_utils::validate_language_code(&self.target_language)?;

        if language_utils::language_codes_match(&self.source_language, &self.target_language) {
            return Err(anyhow!(
                "Source and target languages must differ: {} -> {}",
                self.source_language,
                self.target_language
            ));
        }

        if self.document_extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("Document extension must not be empty"));
        }

        Ok(())
    }

    /// The language code inserted into output filenames, normalized to the
    /// 2-letter form when one exists (`deu` and `ger` both become `de`)
    pub fn language_infix(&self) -> Result<String> {
        language_utils::normalize_to_part1_or_part2t(&self.target_language)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            document_extension: default_document_extension(),
            log_level: LogLevel::default(),
        }
    }
}
