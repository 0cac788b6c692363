use serde::Serialize;

/// Direction of a percentage, driving up/down coloring downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
    Neutral,
}

/// Payload of a resolved inline span.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SpanKind {
    Bold {
        text: String,
    },
    Highlight {
        text: String,
    },
    Link {
        text: String,
        url: String,
    },
    Percent {
        /// Magnitude without sign, `5.0` for `-5%`.
        value: f64,
        sign: Sign,
        /// The match as written.
        raw: String,
        /// `raw` without a leading `~`.
        display: String,
    },
    Entity {
        name: String,
    },
}

/// A typed inline construct at `[start, end)` (byte offsets) of its fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineSpan {
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub kind: SpanKind,
}

impl InlineSpan {
    pub fn intersects(&self, other: &InlineSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            SpanKind::Bold { .. } => "bold",
            SpanKind::Highlight { .. } => "highlight",
            SpanKind::Link { .. } => "link",
            SpanKind::Percent { .. } => "percent",
            SpanKind::Entity { .. } => "entity",
        }
    }
}

/// Plain text between spans. `text` is the display form of the source range,
/// with unbalanced `**` removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainText {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// One piece of a fully segmented fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InlineSegment {
    Text(PlainText),
    Span(InlineSpan),
}

impl InlineSegment {
    pub fn start(&self) -> usize {
        match self {
            InlineSegment::Text(t) => t.start,
            InlineSegment::Span(s) => s.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            InlineSegment::Text(t) => t.end,
            InlineSegment::Span(s) => s.end,
        }
    }
}
