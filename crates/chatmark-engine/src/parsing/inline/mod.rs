//! # Inline Span Resolution
//!
//! Multi-pass, priority-ordered scanning of one text fragment.
//!
//! ## Architecture
//!
//! Inline resolution is separate from block parsing: the block parser leaves
//! markers in block text and a renderer resolves each fragment (paragraph,
//! heading, list item, table cell, quote) on demand.
//!
//! Five independent scans run over the same fragment, in priority order:
//!
//! 1. bold `**text**`
//! 2. highlight `【text】` / `「text」`
//! 3. link `[text](url)`
//! 4. percent `+5%`, `-1.2%`, `~5%`, `30%`
//! 5. entity names from an injected dictionary, longest name first
//!
//! A match is dropped if it intersects a match accepted by an earlier scan,
//! so a percentage inside a bold phrase is never tagged twice.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan`, `SpanKind`, `InlineSegment`
//! - **`kinds`**: one type per span kind owning its pattern
//! - **`cursor`**: `Cursor` for char-by-char scanning with byte positions
//! - **`parser`**: `InlineResolver`, the pass runner
//! - **`prepare`**: `prepare_inline_text` pre-cleaning
//! - **`rules`**: injectable entity vocabulary (`InlineRules`)

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod prepare;
pub mod rules;
pub mod types;

pub use parser::InlineResolver;
pub use prepare::prepare_inline_text;
pub use rules::InlineRules;
pub use types::{InlineSegment, InlineSpan, PlainText, Sign, SpanKind};
