use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{InlineSpan, Sign, SpanKind};

/// Signed or unsigned percentage such as `+5%`, `-1.2%`, `~5%` or `30%`.
pub struct Percent;

impl Percent {
    /// Marks an approximate value, read as an increase.
    pub const APPROX: char = '~';

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"[~+\-]?[0-9]+\.?[0-9]*%").expect("Invalid percent regex")
        })
    }

    pub fn find(text: &str) -> Vec<InlineSpan> {
        Self::pattern()
            .find_iter(text)
            .map(|m| InlineSpan {
                start: m.start(),
                end: m.end(),
                kind: Self::classify(m.as_str()),
            })
            .collect()
    }

    /// `+` and `~` are positive, `-` negative, and an unsigned value is
    /// positive when greater than zero.
    pub fn classify(raw: &str) -> SpanKind {
        let display = raw.strip_prefix(Self::APPROX).unwrap_or(raw);
        let value: f64 = display
            .trim_start_matches(['+', '-'])
            .trim_end_matches('%')
            .trim_end_matches('.')
            .parse()
            .unwrap_or_default();
        let sign = if raw.starts_with(Self::APPROX) || display.starts_with('+') {
            Sign::Positive
        } else if display.starts_with('-') {
            Sign::Negative
        } else if value > 0.0 {
            Sign::Positive
        } else {
            Sign::Neutral
        };
        SpanKind::Percent {
            value,
            sign,
            raw: raw.to_string(),
            display: display.to_string(),
        }
    }
}
