pub mod blocks;
pub mod directive;
pub mod inline;
pub mod lines;
pub mod snapshot;

use std::sync::OnceLock;

use crate::error::RulesError;

use blocks::{BlockBuilder, BlockRules, ContentBlock, MarkdownLineClassifier, kinds::StepFlow};
use inline::{InlineRules, InlineSegment, InlineSpan};
use lines::lines;

pub use inline::InlineResolver;

/// Segments raw answer text into [`ContentBlock`]s.
///
/// Holds the compiled form of a [`BlockRules`] vocabulary; parsing itself
/// keeps no state between calls.
#[derive(Debug, Clone)]
pub struct BlockParser {
    rules: BlockRules,
    step_flow: StepFlow,
}

impl BlockParser {
    pub fn new(rules: &BlockRules) -> Result<Self, RulesError> {
        Ok(Self {
            rules: rules.clone(),
            step_flow: StepFlow::new(&rules.step_keywords)?,
        })
    }

    /// Parses `text` into blocks. Total over all inputs: anything that is
    /// not recognised ends up in a [`ContentBlock::Paragraph`].
    pub fn parse(&self, text: &str) -> Vec<ContentBlock> {
        let classifier = MarkdownLineClassifier;
        let classes: Vec<_> = lines(text).map(|lr| classifier.classify(&lr)).collect();

        let mut builder = BlockBuilder::new(&self.rules, &self.step_flow);
        for (i, lc) in classes.iter().enumerate() {
            builder.push(lc, classes.get(i + 1));
        }
        builder.finish()
    }
}

fn default_block_parser() -> &'static BlockParser {
    static PARSER: OnceLock<BlockParser> = OnceLock::new();
    PARSER.get_or_init(|| {
        BlockParser::new(&BlockRules::default()).expect("Invalid default block rules")
    })
}

fn default_inline_resolver() -> &'static InlineResolver {
    static RESOLVER: OnceLock<InlineResolver> = OnceLock::new();
    RESOLVER.get_or_init(|| {
        InlineResolver::new(&InlineRules::default()).expect("Invalid default inline rules")
    })
}

/// Parses `text` with the built-in block vocabulary.
pub fn parse_blocks(text: &str) -> Vec<ContentBlock> {
    default_block_parser().parse(text)
}

/// Resolves inline spans of one text fragment with the built-in vocabulary.
pub fn resolve_spans(text: &str) -> Vec<InlineSpan> {
    default_inline_resolver().spans(text)
}

/// Like [`resolve_spans`], but also returns the plain-text gaps between spans.
pub fn resolve_segments(text: &str) -> Vec<InlineSegment> {
    default_inline_resolver().segments(text)
}

#[cfg(test)]
mod tests;
