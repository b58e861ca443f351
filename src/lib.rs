/*!
 * # docstub - Placeholder translations for AsciiDoc documentation
 *
 * A Rust library for stamping out placeholder German translations of
 * English documentation fragments.
 *
 * ## Features
 *
 * - Scan a documentation directory for `.adoc` source files
 * - Generate a sibling `.de.adoc` file per source with a translated heading,
 *   a fixed notice block, and the original content kept verbatim below
 * - Never overwrite an existing translation (idempotent reruns)
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document_processor`: Document header parsing and rewriting
 * - `glossary`: English to German terminology table
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document_processor;
pub mod errors;
pub mod file_utils;
pub mod glossary;
pub mod language_utils;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, ProcessingSummary};
pub use document_processor::{Document, DocumentHeader, HeaderRewriter, TRANSLATION_NOTICE};
pub use errors::AppError;
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part1_or_part2t};
