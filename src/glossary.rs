/*!
 * English to German glossary for documentation section phrases.
 *
 * The table covers the canonical section headings used across the anchor
 * documentation. It is read-only and initialized once at process start;
 * the full-translation path that will consume it per-section is still
 * pending, but the pairs are already exposed through `lookup` and the
 * `glossary` CLI subcommand.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

// @const: Canonical phrase pairs, in documentation order
const TERM_PAIRS: &[(&str, &str)] = &[
    ("Full Name", "Vollständiger Name"),
    ("Also known as", "Auch bekannt als"),
    ("Core Concepts", "Kernkonzepte"),
    ("Key Proponents", "Schlüsselvertreter"),
    ("When to Use", "Wann zu verwenden"),
    ("When Not to Use", "Wann nicht zu verwenden"),
    ("Benefits", "Vorteile"),
    ("Trade-offs", "Kompromisse"),
    ("Related Concepts", "Verwandte Konzepte"),
    ("Further Reading", "Weiterführende Literatur"),
    ("Examples", "Beispiele"),
    ("Common Pitfalls", "Häufige Fehler"),
    ("Best Practices", "Best Practices"),
];

// @const: Lookup index over the phrase pairs
static TRANSLATIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TERM_PAIRS.iter().copied().collect());

/// Look up the German equivalent of a canonical English phrase.
///
/// Matching is exact apart from surrounding whitespace.
pub fn lookup(term: &str) -> Option<&'static str> {
    TRANSLATIONS.get(term.trim()).copied()
}

/// Iterate over all known phrase pairs in table order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    TERM_PAIRS.iter().copied()
}

/// Number of phrase pairs in the glossary.
pub fn term_count() -> usize {
    TERM_PAIRS.len()
}
