//! Parse errors.
//!
//! Every error here is fatal to the current parse: no partial tree is
//! returned and the tokenizer yields nothing further. Byte offsets refer to
//! positions inside the literal segment being scanned when the error was
//! raised.

use thiserror::Error;

/// A fatal template error raised by the scanner, tokenizer, or parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A comment was opened with `<!--` but the segment ended before a
    /// `-->` close sequence.
    #[error("unterminated comment starting at byte {at}")]
    MalformedComment {
        /// Byte offset of the comment opener within its segment.
        at: usize,
    },

    /// An entity reference was opened with `&` but no `;` follows in the
    /// segment.
    #[error("entity reference at byte {at} has no terminating ';'")]
    MalformedEntity {
        /// Byte offset of the `&` within its segment.
        at: usize,
    },

    /// An attribute value is missing its opening or closing double quote.
    #[error("attribute value at byte {at} is missing a double quote")]
    MalformedAttributeValue {
        /// Byte offset where the quoted value was expected or left open.
        at: usize,
    },

    /// A closing tag is missing its terminating `>`, or the `</${...}>`
    /// slot form was not followed by optional whitespace and `>`.
    #[error("closing tag at byte {at} is missing its '>'")]
    MalformedClosingTag {
        /// Byte offset within the segment being scanned.
        at: usize,
    },

    /// A `/` in attribute position was not immediately followed by `>`.
    #[error("expected '>' after '/' in self-closing tag at byte {at}")]
    MalformedSelfClosingTag {
        /// Byte offset of the character following the `/`.
        at: usize,
    },

    /// A character in attribute-reading position that can neither start an
    /// attribute name nor terminate the tag.
    #[error("cannot start an attribute with {found:?} at byte {at}")]
    InvalidAttributeStart {
        /// Byte offset of the offending character.
        at: usize,
        /// The character found.
        found: char,
    },

    /// An `=` was read with no attribute name before it.
    #[error("'=' with no attribute name before it")]
    DanglingEqualsSign,

    /// A token arrived somewhere the grammar does not allow it, e.g. an
    /// attribute value with no pending name.
    #[error("unexpected {found} token")]
    UnexpectedToken {
        /// Rendered form of the offending token.
        found: String,
    },

    /// A spread slot (`...${value}`) whose value does not yield an
    /// attribute map.
    #[error("spread slot value is not an attribute set")]
    InvalidSpread,

    /// The template begins with a closing tag.
    #[error("closing tag with no matching open tag")]
    UnexpectedClosingTag,

    /// The token stream ended while a node or attribute list was still
    /// open.
    #[error("unexpected end of template")]
    UnexpectedEndOfTemplate,
}
