use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{InlineSpan, SpanKind};

/// Markdown link `[text](url)`.
pub struct Link;

impl Link {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"))
    }

    pub fn find(text: &str) -> Vec<InlineSpan> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let m = caps.get(0)?;
                Some(InlineSpan {
                    start: m.start(),
                    end: m.end(),
                    kind: SpanKind::Link {
                        text: caps[1].to_string(),
                        url: caps[2].to_string(),
                    },
                })
            })
            .collect()
    }
}
