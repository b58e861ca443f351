use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

// @module: Document header parsing and placeholder-translation rewriting

// @const: AsciiDoc attribute entry line, e.g. `:description: value`
static ATTRIBUTE_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:[A-Za-z0-9_-]+:").unwrap());

/// Notice block prepended to every generated translation.
///
/// The original English content is kept below the notice until the full
/// translation of the technical material is done.
pub const TRANSLATION_NOTICE: &str = "\
[NOTE]
====
Dies ist eine deutsche Übersetzung. Der englische Originaltext wurde beibehalten,
da die vollständige Übersetzung der technischen Inhalte noch aussteht.
====";

/// A documentation source file loaded into memory
#[derive(Debug)]
pub struct Document {
    /// Source filename
    pub source_file: PathBuf,

    /// Full file contents
    pub raw_text: String,
}

impl Document {
    /// Read a document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw_text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {:?}", path))?;

        Ok(Document {
            source_file: path.to_path_buf(),
            raw_text,
        })
    }

    /// Parse the heading of this document
    pub fn header(&self) -> DocumentHeader {
        DocumentHeader::parse(&self.raw_text)
    }
}

/// Structured result of parsing a document heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHeader {
    /// Human-readable title, heading markers and whitespace stripped
    pub title: String,

    /// Optional colon-delimited metadata belonging to the heading
    pub attribute_line: Option<String>,
}

impl DocumentHeader {
    /// Extract the title and attribute metadata from raw document text.
    ///
    /// Fallback rules for malformed input:
    /// - no heading marker on the first line: the whole first line is the title
    /// - no colon anywhere: no attribute metadata
    /// - empty input: empty title, no attribute metadata
    ///
    /// Never panics.
    pub fn parse(raw_text: &str) -> Self {
        let mut lines = raw_text.lines();
        let first = lines.next().unwrap_or("");

        // The title segment is the first line with its heading marker run removed
        let heading = first.trim_start().trim_start_matches('=');

        // Inline metadata follows the first colon; further colons belong to the
        // metadata itself and must be preserved
        let (title, inline_metadata) = match heading.split_once(':') {
            Some((left, rest)) => {
                let rest = rest.trim();
                let metadata = if rest.is_empty() {
                    None
                } else {
                    Some(rest.to_string())
                };
                (left.trim(), metadata)
            }
            None => (heading.trim(), None),
        };

        // An attribute entry line directly under the heading takes precedence
        // over inline metadata
        let attribute_line = lines
            .next()
            .filter(|line| ATTRIBUTE_LINE_REGEX.is_match(line))
            .map(|line| line.to_string())
            .or(inline_metadata);

        DocumentHeader {
            title: title.to_string(),
            attribute_line,
        }
    }
}

/// Rewrites document text into its placeholder-translation form
#[derive(Debug, Clone)]
pub struct HeaderRewriter {
    // @field: Uppercased language tag for the generated heading, e.g. "DE"
    language_tag: String,
}

impl HeaderRewriter {
    /// Create a rewriter for the given target language code
    pub fn new(target_language: &str) -> Self {
        HeaderRewriter {
            language_tag: target_language.trim().to_uppercase(),
        }
    }

    /// Produce the placeholder translation for one document's text.
    ///
    /// The output is, in order: the translated heading line, the attribute
    /// line (or an empty line), a blank line, the notice block, a blank line,
    /// and the complete original text. The original text is always the exact
    /// byte suffix of the result; nothing from the source is lost or altered.
    pub fn rewrite(&self, raw_text: &str) -> String {
        let header = DocumentHeader::parse(raw_text);

        format!(
            "= [{}] {}\n{}\n\n{}\n\n{}",
            self.language_tag,
            header.title,
            header.attribute_line.as_deref().unwrap_or(""),
            TRANSLATION_NOTICE,
            raw_text
        )
    }

    /// Rewrite a loaded document
    pub fn rewrite_document(&self, document: &Document) -> String {
        self.rewrite(&document.raw_text)
    }
}
