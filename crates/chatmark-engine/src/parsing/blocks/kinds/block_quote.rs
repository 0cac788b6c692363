use crate::parsing::blocks::{BlockRules, QuoteVariant};

/// Block quote: consecutive lines starting with `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PREFIX)
    }

    /// Strips one `>` and the whitespace after it.
    pub fn strip_prefix(trimmed: &str) -> &str {
        trimmed
            .strip_prefix(Self::PREFIX)
            .map_or(trimmed, str::trim_start)
    }

    /// Classifies joined quote text. Tip words are checked first, then
    /// warning words, then success words; the first hit wins.
    pub fn variant(text: &str, rules: &BlockRules) -> QuoteVariant {
        let hit = |words: &[String]| words.iter().any(|w| text.contains(w.as_str()));
        if hit(&rules.tip_keywords) {
            QuoteVariant::Tip
        } else if hit(&rules.warning_keywords) {
            QuoteVariant::Warning
        } else if hit(&rules.success_keywords) {
            QuoteVariant::Success
        } else {
            QuoteVariant::Info
        }
    }
}
