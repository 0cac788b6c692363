use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{InlineSpan, SpanKind};

/// Highlighted term in CJK corner or lenticular brackets: `【text】`, `「text」`.
pub struct Highlight;

impl Highlight {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"[【「]([^】」]+)[」】]").expect("Invalid highlight regex")
        })
    }

    pub fn find(text: &str) -> Vec<InlineSpan> {
        Self::pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let m = caps.get(0)?;
                Some(InlineSpan {
                    start: m.start(),
                    end: m.end(),
                    kind: SpanKind::Highlight {
                        text: caps[1].to_string(),
                    },
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_bracket_styles() {
        let spans = Highlight::find("【门店】与「外卖」");
        assert_eq!(spans.len(), 2);
        assert_eq!(
            spans[1].kind,
            SpanKind::Highlight {
                text: "外卖".to_string()
            }
        );
    }

    #[test]
    fn offsets_are_bytes() {
        let spans = Highlight::find("a【b】");
        assert_eq!((spans[0].start, spans[0].end), (1, 8));
    }
}
