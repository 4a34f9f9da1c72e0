//! Shared utilities for the cinder template library.

/// Deduplicated diagnostic warnings.
pub mod warning;
