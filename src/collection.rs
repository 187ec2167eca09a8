//! Directory traversal that assembles the glyph collection.
//!
//! Each file in the source directory is named for the codepoint sequence it
//! draws (`emoji_u1f600.svg`, `emoji_u1f1fa_1f1f8.svg`, …). The builder
//! derives the emoji text from the name, extracts the inner markup from the
//! contents, and accumulates the results in enumeration order. Entries that
//! fail on their own account are skipped with a warning; environment-level
//! failures abort the batch.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::codepoint;
use crate::extract;
use crate::glyph::{Glyph, GlyphCollection};

/// Filename shape every glyph file must follow: `emoji_u<HEX>[_<HEX>…].svg`.
const NAME_PREFIX: &str = "emoji_u";
const NAME_SUFFIX: &str = ".svg";

// ============================================================================
// CollectionError
// ============================================================================

/// Batch-fatal failures while building a collection.
///
/// Per-entry problems (malformed names, undecodable codepoints) never reach
/// this level; they are logged and the entry is skipped.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The source directory could not be listed.
    #[error("failed to list glyph directory `{path}`")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A glyph file could not be read. The source tree is expected to be
    /// sound once fetched, so this points at the environment, not the data.
    #[error("failed to read glyph file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Building
// ============================================================================

/// Derives the raw codepoint string from a glyph filename.
fn codepoints_in_name(name: &str) -> Option<&str> {
    name.strip_prefix(NAME_PREFIX)?.strip_suffix(NAME_SUFFIX)
}

/// Builds a [`GlyphCollection`] from a directory of per-glyph SVG files.
///
/// Entries are visited in whatever order the platform lists them; no sort is
/// applied. An empty directory yields an empty collection. Entries whose
/// name does not match `emoji_u<HEX>[_<HEX>…].svg` or whose codepoints fail
/// to decode are skipped with a warning identifying the entry and its
/// ordinal position; the batch continues. A file that cannot be read fails
/// the whole batch.
pub fn build(dir: &Path) -> Result<GlyphCollection, CollectionError> {
    let list_error = |source| CollectionError::List {
        path: dir.to_path_buf(),
        source,
    };
    let entries = fs::read_dir(dir)
        .map_err(list_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(list_error)?;
    let total = entries.len();

    let mut collection = GlyphCollection::new();
    for (index, entry) in entries.iter().enumerate() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!(
                entry = %file_name.to_string_lossy(),
                position = index + 1,
                total,
                "skipping glyph file with non-UTF-8 name"
            );
            continue;
        };
        let Some(raw_codepoints) = codepoints_in_name(name) else {
            warn!(
                entry = name,
                position = index + 1,
                total,
                "skipping file without the emoji_u*.svg name shape"
            );
            continue;
        };

        let path = entry.path();
        let contents = fs::read(&path).map_err(|source| CollectionError::Read { path, source })?;
        let markup = extract::extract(&contents);

        match codepoint::decode(raw_codepoints, '_') {
            Ok(text) => collection.push(Glyph::new(text, markup)),
            Err(err) => {
                warn!(
                    entry = name,
                    position = index + 1,
                    total,
                    error = %err,
                    "skipping glyph with undecodable codepoints"
                );
            }
        }
    }

    Ok(collection)
}

// ============================================================================
// Tests
// ============================================================================
