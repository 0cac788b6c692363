//! # chatmark-engine
//!
//! Turns the semi-Markdown text of a chat answer into typed content blocks,
//! resolves inline spans inside those blocks, and repairs loosely specified
//! chart descriptors into a complete chart encoding.
//!
//! All entry points are pure functions of their input and an explicit
//! [`Rules`] value. The free functions ([`parse_blocks`], [`resolve_spans`],
//! [`normalize_chart`]) use the built-in vocabulary.

pub mod chart;
pub mod error;
pub mod parsing;
pub mod rules;

pub use chart::{
    ChartInput, ChartNormalizer, ChartSpec, ChartType, SeriesKey, normalize_chart,
    try_normalize_chart,
};
pub use error::{ChartError, RulesError};
pub use parsing::{
    BlockParser, InlineResolver, parse_blocks, resolve_segments, resolve_spans,
    blocks::{ChecklistItem, ContentBlock, ListItem, QuoteVariant, Step},
    directive::{Directive, find_directives},
    inline::{InlineSegment, InlineSpan, Sign, SpanKind, prepare_inline_text},
};
pub use rules::Rules;

/// Block parser, inline resolver and chart normalizer built from one [`Rules`] value.
#[derive(Debug, Clone)]
pub struct Engine {
    pub blocks: BlockParser,
    pub inline: InlineResolver,
    pub charts: ChartNormalizer,
}

impl Engine {
    pub fn new(rules: &Rules) -> Result<Self, RulesError> {
        Ok(Self {
            blocks: BlockParser::new(&rules.blocks)?,
            inline: InlineResolver::new(&rules.inline)?,
            charts: ChartNormalizer::new(rules.chart.clone()),
        })
    }
}
