//! emoji-iconset-gen: offline emoji iconset generation pipeline
//!
//! This crate turns a directory of per-glyph SVG files (the Noto emoji
//! sources) and a remote shortname-to-codepoint dictionary into two
//! generated documents: an icon-set document embedding one grouped drawing
//! element per emoji, and a dictionary document embedding a shortname →
//! emoji lookup table for script-level consumption.
//!
//! Data flows one way: the collection builder walks the source directory,
//! decoding each filename's codepoint sequence and extracting the inner
//! markup from each file; the dictionary builder decodes the remote entry
//! map; the renderer serializes both into their documents. Rendering is a
//! terminal sink; nothing depends on its output.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use emoji_iconset_gen::{collection, render};
//!
//! let glyphs = collection::build(Path::new("noto-emoji/svg"))?;
//! let document = render::iconset(&glyphs);
//! # Ok::<(), emoji_iconset_gen::CollectionError>(())
//! ```

pub mod codepoint;
pub mod collection;
pub mod dictionary;
pub mod extract;
pub mod fetch;
pub mod glyph;
pub mod render;

pub use codepoint::{DecodeError, DecodeErrorKind};
pub use collection::CollectionError;
pub use dictionary::{Dictionary, RawDictEntry};
pub use glyph::{Glyph, GlyphCollection};
