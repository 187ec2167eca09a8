//! Deterministic rendering of the generated documents.
//!
//! Rendering is a terminal sink: a direct structural mapping from the built
//! collection and dictionary into two document strings. No reordering, no
//! deduplication, no validation, and no escaping: glyph markup is trusted,
//! pre-extracted drawing instructions.

use crate::dictionary::Dictionary;
use crate::glyph::GlyphCollection;

/// Skeleton around the per-glyph `<g>` elements of the iconset document.
const ICONSET_HEADER: &str = r#"<link rel="import" href="../iron-icon/iron-icon.html">
<link rel="import" href="../iron-iconset-svg/iron-iconset-svg.html">

<iron-iconset-svg name="emoji" size="128">

<svg><defs>
"#;

const ICONSET_FOOTER: &str = "</defs></svg>\n</iron-iconset-svg>\n";

/// Global name under which the dictionary document exposes its lookup table.
const DICTIONARY_GLOBAL: &str = "window.EmojiJSON";

/// Renders the iconset document: one grouped element per glyph, in
/// collection order, each carrying the glyph's text as its id and its markup
/// verbatim.
///
/// Total and deterministic; an empty collection renders the skeleton with an
/// empty defs block.
pub fn iconset(collection: &GlyphCollection) -> String {
    let mut doc = String::with_capacity(ICONSET_HEADER.len() + ICONSET_FOOTER.len());
    doc.push_str(ICONSET_HEADER);
    for glyph in collection {
        doc.push_str(&format!("<g id=\"{}\">{}</g>\n", glyph.text, glyph.markup));
    }
    doc.push_str(ICONSET_FOOTER);
    doc
}

/// Renders the dictionary document: the lookup table serialized as a JSON
/// object literal exposed under a fixed global name.
///
/// The serialization is lossless and, because [`Dictionary`] is key-sorted,
/// identical across runs with identical input.
pub fn dictionary(dict: &Dictionary) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(dict)?;
    Ok(format!("<script>{DICTIONARY_GLOBAL} = {json};</script>\n"))
}

// ============================================================================
// Tests
// ============================================================================
