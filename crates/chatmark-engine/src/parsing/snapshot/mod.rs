//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks and their resolved inline
//!   segments to a stable, serializable `Snap` for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (heading levels
//!   in range, no empty paragraphs, inline segments covering each fragment)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
