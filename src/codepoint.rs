//! Codepoint sequence decoding.
//!
//! Glyph filenames and dictionary entries both carry emoji as sequences of
//! hexadecimal Unicode code points joined by a separator (`_` in filenames,
//! `-` in dictionary data). This module turns such a sequence into the
//! literal character sequence it denotes, e.g. `"1f600_1f3fb"` into a
//! skin-toned grinning face.

use std::num::IntErrorKind;

use thiserror::Error;

// ============================================================================
// DecodeError
// ============================================================================

/// Error produced when a codepoint sequence fails to decode.
///
/// Decoding is all-or-nothing: the first bad token fails the whole sequence
/// and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid codepoint token `{token}` at position {position}: {kind}")]
pub struct DecodeError {
    /// The offending token, verbatim.
    pub token: String,

    /// Zero-based position of the token within the sequence.
    pub position: usize,

    /// What was wrong with the token.
    pub kind: DecodeErrorKind,
}

/// The ways a single codepoint token can be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// The token was empty, e.g. from a doubled separator.
    #[error("empty token")]
    Empty,

    /// The token is not a base-16 number.
    #[error("not a base-16 number")]
    NotHex,

    /// The value is not a valid Unicode scalar (a surrogate, or above
    /// U+10FFFF).
    #[error("not a valid Unicode scalar value")]
    OutOfRange,
}

// ============================================================================
// Decoding
// ============================================================================

/// Decodes a separator-delimited sequence of hex code points into the
/// character sequence it denotes.
///
/// Tokens are parsed as base-16 scalar values and concatenated in order, so
/// multi-codepoint emoji (skin-tone modifiers, flag pairs, ZWJ sequences)
/// come out as the full character sequence.
///
/// # Example
///
/// ```
/// use emoji_iconset_gen::codepoint::decode;
///
/// assert_eq!(decode("1f600", '_').unwrap(), "😀");
/// assert_eq!(decode("1f1fa-1f1f8", '-').unwrap(), "🇺🇸");
/// ```
pub fn decode(raw: &str, separator: char) -> Result<String, DecodeError> {
    let error = |token: &str, position, kind| DecodeError {
        token: token.to_string(),
        position,
        kind,
    };

    let mut text = String::new();
    for (position, token) in raw.split(separator).enumerate() {
        if token.is_empty() {
            return Err(error(token, position, DecodeErrorKind::Empty));
        }
        let value = u32::from_str_radix(token, 16).map_err(|e| {
            let kind = match e.kind() {
                IntErrorKind::PosOverflow => DecodeErrorKind::OutOfRange,
                _ => DecodeErrorKind::NotHex,
            };
            error(token, position, kind)
        })?;
        let ch = char::from_u32(value)
            .ok_or_else(|| error(token, position, DecodeErrorKind::OutOfRange))?;
        text.push(ch);
    }
    Ok(text)
}

// ============================================================================
// Tests
// ============================================================================
