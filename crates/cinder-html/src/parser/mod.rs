//! Template parser module for tree construction.

/// Recursive-descent parser implementation.
pub mod core;

pub use core::{Parser, parse};
