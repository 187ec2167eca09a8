//! Glyph markup extraction.
//!
//! Source glyph files are small SVG documents: a single top-level `<svg>`
//! wrapper around the drawing instructions, plus whatever newlines, tabs and
//! header noise the upstream generator emitted. The iconset document embeds
//! the instructions inside its own `<svg>` element, so the per-glyph wrapper
//! and the formatting noise have to go.

use std::sync::LazyLock;

use regex::Regex;

static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());
static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r".*?<svg.*?>").unwrap());

const CLOSING_TAG: &str = "</svg>";

/// Strips formatting noise and the outer `<svg>` wrapper from one glyph
/// file's contents, yielding the inner drawing instructions.
///
/// Line endings and tabs are removed first, then the first opening `<svg …>`
/// tag (together with any characters preceding it) and the first literal
/// `</svg>`. Exactly one tag of each kind is removed; nested non-wrapper
/// elements and their attributes are left byte-for-byte intact.
///
/// This is a best-effort textual strip, not a parser: it assumes a single,
/// non-nested wrapper pair and performs no well-formedness validation.
pub fn extract(raw: &[u8]) -> String {
    let contents = String::from_utf8_lossy(raw);
    let flat = NEWLINES.replace_all(&contents, "");
    let flat = flat.replace('\t', "");
    // Header noise (XML declarations, generator comments) sits before the
    // opening tag on what used to be its line; it goes with the tag.
    let stripped = OPENING_TAG.replace(&flat, "");
    stripped.replacen(CLOSING_TAG, "", 1)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_wrapper_and_whitespace() {
        let raw = b"<svg xmlns=\"http://www.w3.org/2000/svg\">\n\t<path d=\"M0 0\"/>\n</svg>";
        assert_eq!(extract(raw), r#"<path d="M0 0"/>"#);
    }

    #[test]
    fn removes_crlf_line_endings() {
        let raw = b"<svg>\r\n<circle r=\"4\"/>\r\n</svg>\r\n";
        assert_eq!(extract(raw), r#"<circle r="4"/>"#);
    }

    #[test]
    fn header_noise_goes_with_the_opening_tag() {
        let raw = b"emoji_u1f600.svg<svg width=\"128\" height=\"128\"><path/></svg>";
        assert_eq!(extract(raw), "<path/>");
    }

    #[test]
    fn xml_declaration_goes_with_the_opening_tag() {
        let raw = b"<?xml version=\"1.0\"?>\n<svg viewBox=\"0 0 128 128\"><g/></svg>";
        assert_eq!(extract(raw), "<g/>");
    }

    #[test]
    fn nested_non_wrapper_tags_are_untouched() {
        let raw = b"<svg><g fill=\"#fcc21b\"><path d=\"M1 2\"/><circle/></g></svg>";
        assert_eq!(extract(raw), r##"<g fill="#fcc21b"><path d="M1 2"/><circle/></g>"##);
    }

    #[test]
    fn removes_exactly_one_closing_tag() {
        let raw = b"<svg>a</svg>b</svg>";
        assert_eq!(extract(raw), "ab</svg>");
    }

    #[test]
    fn idempotent_on_whitespace() {
        let raw = b"<svg>\n\t<path d=\"M0 0\"/>\n</svg>";
        let once = extract(raw);
        let twice = extract(once.as_bytes());
        assert_eq!(once, twice);
    }

    #[test]
    fn content_without_wrapper_passes_through() {
        let raw = b"<path d=\"M0 0\"/>";
        assert_eq!(extract(raw), r#"<path d="M0 0"/>"#);
    }
}
