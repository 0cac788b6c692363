use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{InlineSpan, SpanKind};

/// `**text**` emphasis.
pub struct Bold;

impl Bold {
    pub const MARKER: &'static str = "**";

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"))
    }

    /// Balanced pairs with no `*` inside, kept when stripping stray markers.
    fn pair() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold pair regex"))
    }

    pub fn find(text: &str) -> Vec<InlineSpan> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let m = caps.get(0)?;
                Some(InlineSpan {
                    start: m.start(),
                    end: m.end(),
                    kind: SpanKind::Bold {
                        text: caps[1].to_string(),
                    },
                })
            })
            .collect()
    }

    /// Removes `**` markers that are not part of a balanced pair.
    pub fn strip_stray(text: &str) -> Cow<'_, str> {
        if !text.contains(Self::MARKER) {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for m in Self::pair().find_iter(text) {
            out.push_str(&text[last..m.start()].replace(Self::MARKER, ""));
            out.push_str(m.as_str());
            last = m.end();
        }
        out.push_str(&text[last..].replace(Self::MARKER, ""));
        Cow::Owned(out)
    }
}
