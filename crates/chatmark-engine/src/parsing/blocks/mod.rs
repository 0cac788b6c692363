//! # Block Parsing
//!
//! Two-phase, line-oriented block segmentation.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts only (trimmed text, indentation, blank status).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine is
//!    fed one line at a time plus a one-line lookahead and emits
//!    `ContentBlock`s as runs open and close.
//!
//! ## Modules
//!
//! - **`types`**: `ContentBlock` and its item types
//! - **`kinds`**: one type per block kind owning its syntax (markers, patterns)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open` dispatch, in precedence order
//! - **`builder`**: `BlockBuilder` state machine
//! - **`rules`**: injectable keyword tables (`BlockRules`)
//!
//! ## Key Invariants
//!
//! - Parsing is total: unknown line shapes become paragraphs
//! - Fenced code is a raw zone: no other opener is tried inside it
//! - Block text keeps inline markers for the inline resolver
//! - Only code, table, list, checklist and step-flow runs have their own
//!   termination rules; everything else stops at a blank line

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod rules;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{Indent, LineClass, MarkdownLineClassifier};
pub use rules::BlockRules;
pub use types::{ChecklistItem, ContentBlock, ListItem, QuoteVariant, Step};
