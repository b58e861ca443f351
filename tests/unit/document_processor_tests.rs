/*!
 * Tests for document header parsing and rewriting
 */

use anyhow::Result;
use docstub::document_processor::{Document, DocumentHeader, HeaderRewriter, TRANSLATION_NOTICE};

use crate::common;

/// Test that a heading with an attribute line is rewritten with the translated title
#[test]
fn test_rewrite_withHeadingAndAttributeLine_shouldTranslateHeading() {
    let input = "= Full Name\n:subtitle: x\nBody text";
    let rewriter = HeaderRewriter::new("de");

    let output = rewriter.rewrite(input);

    assert_eq!(output.lines().next(), Some("= [DE] Full Name"));
    assert!(output.contains("Body text"));
}

/// Test that the original text is always the exact suffix of the output
#[test]
fn test_rewrite_withAnyInput_shouldKeepOriginalAsSuffix() {
    let rewriter = HeaderRewriter::new("de");

    for input in [
        "= Full Name\n:subtitle: x\nBody text",
        "= Title only\n\nSome body\n",
        "no heading marker at all\njust text",
        "",
    ] {
        let output = rewriter.rewrite(input);
        assert!(
            output.ends_with(input),
            "output does not end with original for input {:?}",
            input
        );
    }
}

/// Test that the notice block appears between the heading and the original text
#[test]
fn test_rewrite_withValidDocument_shouldContainNoticeBlock() {
    let rewriter = HeaderRewriter::new("de");

    let output = rewriter.rewrite(common::SAMPLE_DOCUMENT);

    assert!(output.contains(TRANSLATION_NOTICE));
    let notice_pos = output.find("[NOTE]").unwrap();
    let original_pos = output.rfind("= Full Name").unwrap();
    assert!(notice_pos < original_pos);
}

/// Test that the attribute line is preserved verbatim in the output
#[test]
fn test_rewrite_withAttributeLine_shouldPreserveAttributeLine() {
    let input = "= Core Concepts\n:category: architecture\n\nBody.\n";
    let rewriter = HeaderRewriter::new("de");

    let output = rewriter.rewrite(input);
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("= [DE] Core Concepts"));
    assert_eq!(lines.next(), Some(":category: architecture"));
    assert_eq!(lines.next(), Some(""));
}

/// Test that a document without an attribute line gets an empty line in its place
#[test]
fn test_rewrite_withoutAttributeLine_shouldEmitEmptyLine() {
    let input = "= Benefits\nBody text without attributes";
    let rewriter = HeaderRewriter::new("de");

    let output = rewriter.rewrite(input);
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("= [DE] Benefits"));
    assert_eq!(lines.next(), Some(""));
}

/// Test that the language tag follows the configured target language
#[test]
fn test_rewrite_withFrenchTarget_shouldUseFrenchTag() {
    let rewriter = HeaderRewriter::new("fr");

    let output = rewriter.rewrite("= Trade-offs\nBody");

    assert_eq!(output.lines().next(), Some("= [FR] Trade-offs"));
}

/// Test the fallback when the first line has no heading marker
#[test]
fn test_parse_withoutHeadingMarker_shouldUseFirstLineAsTitle() {
    let header = DocumentHeader::parse("Plain first line\nSecond line");

    assert_eq!(header.title, "Plain first line");
    assert_eq!(header.attribute_line, None);
}

/// Test that empty input parses without panicking
#[test]
fn test_parse_withEmptyInput_shouldReturnEmptyTitle() {
    let header = DocumentHeader::parse("");

    assert_eq!(header.title, "");
    assert_eq!(header.attribute_line, None);
}

/// Test that inline metadata after the first colon keeps its internal colons
#[test]
fn test_parse_withInlineMetadata_shouldPreserveRemainingColons() {
    let header = DocumentHeader::parse("= Topic: alias: other\nBody");

    assert_eq!(header.title, "Topic");
    assert_eq!(header.attribute_line.as_deref(), Some("alias: other"));
}

/// Test that an attribute entry line takes precedence over inline metadata
#[test]
fn test_parse_withAttributeLineAndInlineMetadata_shouldPreferAttributeLine() {
    let header = DocumentHeader::parse("= Topic: inline\n:category: core\nBody");

    assert_eq!(header.title, "Topic");
    assert_eq!(header.attribute_line.as_deref(), Some(":category: core"));
}

/// Test that a multi-level heading marker run is stripped from the title
#[test]
fn test_parse_withNestedHeadingMarkers_shouldStripMarkerRun() {
    let header = DocumentHeader::parse("== When to Use\nBody");

    assert_eq!(header.title, "When to Use");
}

/// Test that loading a document from disk keeps its content and path
#[test]
fn test_document_load_withExistingFile_shouldReadContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let doc_path = common::create_test_document(temp_dir.path(), "concept.adoc")?;

    let document = Document::load(&doc_path)?;

    assert_eq!(document.source_file, doc_path);
    assert_eq!(document.raw_text, common::SAMPLE_DOCUMENT);
    assert_eq!(document.header().title, "Full Name");

    Ok(())
}

/// Test that loading a missing document fails with an error
#[test]
fn test_document_load_withMissingFile_shouldFail() {
    let result = Document::load("does/not/exist.adoc");

    assert!(result.is_err());
}
