//! Tokenizer and parser for htm-style tagged templates.
//!
//! A template arrives as an ordered sequence of literal text segments with
//! slot values interleaved between them — the shape a tagged template
//! literal produces, with every interpolation already evaluated. This crate
//! turns that sequence into a tree of caller-defined nodes.
//!
//! # Scope
//!
//! - **Scanner** — pure character-cursor functions over one segment.
//! - **Tokenizer** — a context state machine over the whole segment/slot
//!   sequence, exposed as a lazy iterator of tokens. Slots are pulled
//!   exactly when the active context expects one: a child node at top
//!   level, a component reference in tag-name position, a value after `=`,
//!   an attribute set after `...`.
//! - **Parser** — recursive descent over the token stream, delegating node
//!   construction to a [`cinder_tree::NodeBuilder`].
//!
//! What nodes *are* is up to the builder; this crate never interprets them.
//!
//! # Not Supported
//!
//! This is not a general HTML parser:
//! - no DOCTYPE, CDATA, or processing instructions
//! - attribute values must be double-quoted (or slot-supplied)
//! - comments do not nest
//! - the output is a fresh tree per parse; there is no diffing
//!
//! # Example
//!
//! The template ``html`<p class="x">${value}</p>` `` reaches this crate as
//! segments `["<p class=\"x\">", "</p>"]` and one slot value:
//!
//! ```ignore
//! let node = cinder_html::parse(&mut builder, &["<p class=\"x\">", "</p>"], vec![value])?;
//! ```

/// Parse errors.
pub mod error;
/// Recursive-descent tree construction.
pub mod parser;
/// Character-level scanners.
pub mod scanner;
/// Context-sensitive tokenizer over segments and slots.
pub mod tokenizer;

pub use error::ParseError;
pub use parser::{Parser, parse};
pub use tokenizer::{Context, Token, Tokenizer};
