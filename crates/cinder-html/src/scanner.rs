//! Character-level scanners.
//!
//! Each function takes one literal template segment and a byte offset into
//! it, and returns the offset just past the construct it skipped (or a
//! [`ParseError`] for malformed input). The scanners hold no state of their
//! own; the tokenizer owns the cursor and threads it through.
//!
//! Every delimiter this grammar cares about is a single ASCII byte, so the
//! scanners walk raw bytes. Offsets returned to the tokenizer therefore
//! always sit on UTF-8 boundaries and slicing the segment at them is safe.

use crate::error::ParseError;

/// Shortest possible comment, open and close markers back to back.
const MINIMUM_COMMENT: usize = "<!---->".len();

/// Whitespace inside tags and between top-level constructs: space, tab,
/// line feed, carriage return.
#[must_use]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// ASCII letter of either case. Attribute names may start with these.
#[must_use]
pub const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Tag names are lowercase ASCII letters only; anything else (including an
/// uppercase letter) ends the name.
#[must_use]
pub const fn is_tag_name_char(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// Attribute names are ASCII letters of either case or `-`.
#[must_use]
pub const fn is_attribute_name_char(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'-'
}

/// Plain text runs until one of the markup delimiters.
#[must_use]
pub const fn is_text_char(byte: u8) -> bool {
    !matches!(byte, b'<' | b'>' | b'&' | b'"' | b'\'')
}

/// Advance past any run of whitespace.
#[must_use]
pub fn skip_whitespace(text: &str, at: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = at;
    while i < bytes.len() && is_whitespace(bytes[i]) {
        i += 1;
    }
    i
}

/// Advance past one comment, if the cursor rests on one.
///
/// A comment must be at least as long as `<!---->` and must open with
/// `<!--`. The close is the first `>` immediately preceded by `--`; a bare
/// `>` inside the comment does not close it. If the cursor is not on a
/// comment opener at all, the offset is returned unchanged.
///
/// # Errors
///
/// [`ParseError::MalformedComment`] when `<!--` is present but the segment
/// ends before a valid `-->`.
pub fn skip_comment(text: &str, at: usize) -> Result<usize, ParseError> {
    let bytes = text.as_bytes();
    if !bytes[at..].starts_with(b"<!--") {
        return Ok(at);
    }
    if bytes.len() - at < MINIMUM_COMMENT {
        return Err(ParseError::MalformedComment { at });
    }

    let mut i = at + 4;
    loop {
        while i < bytes.len() && bytes[i] != b'>' {
            i += 1;
        }
        if i >= bytes.len() {
            return Err(ParseError::MalformedComment { at });
        }
        i += 1;

        // Only a '>' preceded by "--" closes the comment.
        if i >= at + MINIMUM_COMMENT && bytes[i - 3] == b'-' && bytes[i - 2] == b'-' {
            return Ok(i);
        }
    }
}

/// Advance past any interleaving of whitespace and comments.
///
/// # Errors
///
/// Propagates [`ParseError::MalformedComment`] from [`skip_comment`].
pub fn skip_comments_and_whitespace(text: &str, at: usize) -> Result<usize, ParseError> {
    let bytes = text.as_bytes();
    let mut i = at;
    while i < bytes.len() && (is_whitespace(bytes[i]) || bytes[i..].starts_with(b"<!")) {
        let before = i;
        i = skip_whitespace(text, i);
        i = skip_comment(text, i)?;
        if i == before {
            // "<!" that is not a comment opener; let the tag scanner have it.
            break;
        }
    }
    Ok(i)
}

/// Advance past an entity reference. The cursor rests on the `&`; the
/// returned offset is just past the terminating `;`.
///
/// # Errors
///
/// [`ParseError::MalformedEntity`] when the segment holds no `;`.
pub fn skip_entity(text: &str, at: usize) -> Result<usize, ParseError> {
    text[at..]
        .find(';')
        .map(|semi| at + semi + 1)
        .ok_or(ParseError::MalformedEntity { at })
}

/// Advance past a run of tag-name characters. May advance zero bytes.
#[must_use]
pub fn skip_tag_name(text: &str, at: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = at;
    while i < bytes.len() && is_tag_name_char(bytes[i]) {
        i += 1;
    }
    i
}

/// Advance past a run of attribute-name characters. May advance zero bytes.
#[must_use]
pub fn skip_attribute_name(text: &str, at: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = at;
    while i < bytes.len() && is_attribute_name_char(bytes[i]) {
        i += 1;
    }
    i
}

/// Advance past a double-quoted attribute value, including both quotes.
/// There is no escape handling; the value ends at the first `"`.
///
/// # Errors
///
/// [`ParseError::MalformedAttributeValue`] when the opening or closing
/// quote is missing.
pub fn skip_attribute_value(text: &str, at: usize) -> Result<usize, ParseError> {
    let bytes = text.as_bytes();
    if at >= bytes.len() || bytes[at] != b'"' {
        return Err(ParseError::MalformedAttributeValue { at });
    }

    let mut i = at + 1;
    while i < bytes.len() && bytes[i] != b'"' {
        i += 1;
    }
    if i >= bytes.len() {
        return Err(ParseError::MalformedAttributeValue { at });
    }
    Ok(i + 1)
}

/// Advance past the tail of a closing tag. The cursor rests on the `/` of
/// `</...>`; the returned offset is just past the `>`. The name between is
/// skipped without inspection.
///
/// # Errors
///
/// [`ParseError::MalformedClosingTag`] when the segment ends before `>`.
pub fn skip_closing_tag(text: &str, at: usize) -> Result<usize, ParseError> {
    let bytes = text.as_bytes();
    debug_assert!(bytes.get(at) == Some(&b'/'), "cursor must rest on '/'");

    let mut i = at;
    while i < bytes.len() && bytes[i] != b'>' {
        i += 1;
    }
    if i >= bytes.len() {
        return Err(ParseError::MalformedClosingTag { at });
    }
    Ok(i + 1)
}

/// Advance past a run of plain text. May advance zero bytes.
#[must_use]
pub fn skip_text(text: &str, at: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = at;
    while i < bytes.len() && is_text_char(bytes[i]) {
        i += 1;
    }
    i
}

/// The character at a byte offset, for error payloads. The offset must sit
/// on a character boundary, which holds for every offset the scanners
/// produce.
#[must_use]
pub fn char_at(text: &str, at: usize) -> char {
    text[at..].chars().next().unwrap_or('\u{0}')
}
