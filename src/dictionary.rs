//! Shortname dictionary construction.
//!
//! The remote dictionary is a JSON object mapping opaque ids to entries that
//! carry a hyphen-delimited codepoint string and a human-readable shortname.
//! The builder decodes each entry and produces the shortname → emoji lookup
//! table embedded in the dictionary document.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::warn;

use crate::codepoint;

// ============================================================================
// Raw entries
// ============================================================================

/// One entry of the remote emoji dictionary.
///
/// The object key the entry sat under is an opaque id, irrelevant after
/// parsing; only these two fields matter.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDictEntry {
    /// Hyphen-delimited hex code points, e.g. `"1f1fa-1f1f8"`.
    pub unicode: String,

    /// Human-readable shortname, wrapped in colons, e.g. `":flag_us:"`.
    pub shortname: String,
}

// ============================================================================
// Dictionary
// ============================================================================

/// Mapping from bare shortname to decoded emoji text.
///
/// A `BTreeMap` keeps the serialized form stable across runs even though the
/// source map's iteration order is not.
pub type Dictionary = BTreeMap<String, String>;

/// Builds the shortname lookup table from the remote entry map.
///
/// Entries whose codepoints fail to decode are skipped with a warning; the
/// batch always succeeds. Shortnames are stored with their surrounding `:`
/// delimiters trimmed, and duplicate shortnames resolve to whichever entry
/// is processed last.
pub fn build(entries: &HashMap<String, RawDictEntry>) -> Dictionary {
    let total = entries.len();
    let mut dictionary = Dictionary::new();
    for (index, entry) in entries.values().enumerate() {
        match codepoint::decode(&entry.unicode, '-') {
            Ok(text) => {
                dictionary.insert(entry.shortname.trim_matches(':').to_string(), text);
            }
            Err(err) => {
                warn!(
                    shortname = %entry.shortname,
                    position = index + 1,
                    total,
                    error = %err,
                    "skipping dictionary entry with undecodable codepoints"
                );
            }
        }
    }
    dictionary
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(unicode: &str, shortname: &str) -> RawDictEntry {
        RawDictEntry {
            unicode: unicode.to_string(),
            shortname: shortname.to_string(),
        }
    }

    #[test]
    fn builds_flag_sequence_entry() {
        let mut entries = HashMap::new();
        entries.insert("1F1FA-1F1F8".to_string(), entry("1f1fa-1f1f8", ":flag_us:"));

        let dictionary = build(&entries);
        assert_eq!(dictionary.get("flag_us").map(String::as_str), Some("🇺🇸"));
    }

    #[test]
    fn undecodable_entries_are_skipped() {
        let mut entries = HashMap::new();
        entries.insert("a".to_string(), entry("1f600", ":grinning:"));
        entries.insert("b".to_string(), entry("not-hex", ":broken:"));

        let dictionary = build(&entries);
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("grinning").map(String::as_str), Some("😀"));
        assert!(!dictionary.contains_key("broken"));
    }

    #[test]
    fn duplicate_shortnames_keep_a_single_key() {
        let mut entries = HashMap::new();
        entries.insert("a".to_string(), entry("1f600", ":face:"));
        entries.insert("b".to_string(), entry("1f601", ":face:"));

        let dictionary = build(&entries);
        // Iteration order over the source map is unspecified; whichever
        // entry was processed last wins, and there is exactly one key.
        assert_eq!(dictionary.len(), 1);
        let value = dictionary.get("face").unwrap().as_str();
        assert!(value == "😀" || value == "😁");
    }

    #[test]
    fn empty_input_yields_empty_dictionary() {
        let dictionary = build(&HashMap::new());
        assert!(dictionary.is_empty());
    }

    #[test]
    fn raw_entry_deserializes_from_remote_shape() {
        let json = r#"{"1F600": {"unicode": "1f600", "shortname": ":grinning:", "category": "people"}}"#;
        let entries: HashMap<String, RawDictEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries["1F600"].unicode, "1f600");
        assert_eq!(entries["1F600"].shortname, ":grinning:");
    }
}
