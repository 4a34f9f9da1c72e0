//! Template tokenizer module.
//!
//! Walks the segment/slot sequence of a template and emits a flat, ordered
//! token stream. The tokenizer is context-sensitive (the same slot means a
//! child node at top level, a component reference in tag-name position, and
//! an attribute value after `=`) but never backtracks.

/// Token types produced by the tokenizer.
pub mod token;
/// The context state machine over segments and slots.
pub mod core;

pub use core::{Context, Tokenizer};
pub use token::Token;
