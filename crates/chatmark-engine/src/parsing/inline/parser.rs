use crate::error::RulesError;

use super::{
    InlineRules,
    kinds::{Bold, EntityDictionary, Highlight, Link, Percent},
    types::{InlineSegment, InlineSpan, PlainText},
};

/// Resolves inline spans of text fragments.
///
/// Holds the compiled entity dictionary; resolution keeps no state between
/// calls.
#[derive(Debug, Clone)]
pub struct InlineResolver {
    entities: EntityDictionary,
}

impl InlineResolver {
    pub fn new(rules: &InlineRules) -> Result<Self, RulesError> {
        Ok(Self {
            entities: EntityDictionary::new(&rules.entity_names)?,
        })
    }

    /// Returns the accepted spans of `text`, sorted by `start`.
    ///
    /// # Priority
    /// Scans run bold, highlight, link, percent, entity. A match intersecting
    /// any match accepted by an earlier scan is dropped.
    pub fn spans(&self, text: &str) -> Vec<InlineSpan> {
        let passes = [
            Bold::find(text),
            Highlight::find(text),
            Link::find(text),
            Percent::find(text),
            self.entities.find(text),
        ];

        let mut accepted: Vec<InlineSpan> = vec![];
        for pass in passes {
            for span in pass {
                if accepted.iter().any(|a| a.intersects(&span)) {
                    log::trace!(
                        "dropping {} span at {}..{}",
                        span.kind_name(),
                        span.start,
                        span.end
                    );
                    continue;
                }
                accepted.push(span);
            }
        }
        accepted.sort_by_key(|s| s.start);
        accepted
    }

    /// Returns spans interleaved with the plain-text gaps around them. The
    /// segments cover `text` exactly, in order.
    pub fn segments(&self, text: &str) -> Vec<InlineSegment> {
        fn push_text(out: &mut Vec<InlineSegment>, text: &str, start: usize, end: usize) {
            if end > start {
                out.push(InlineSegment::Text(PlainText {
                    start,
                    end,
                    text: Bold::strip_stray(&text[start..end]).into_owned(),
                }));
            }
        }

        let mut out = vec![];
        let mut last = 0;
        for span in self.spans(text) {
            push_text(&mut out, text, last, span.start);
            last = span.end;
            out.push(InlineSegment::Span(span));
        }
        push_text(&mut out, text, last, text.len());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::{Sign, SpanKind};
    use pretty_assertions::assert_eq;

    fn resolver() -> InlineResolver {
        InlineResolver::new(&InlineRules::default()).unwrap()
    }

    fn kinds(text: &str) -> Vec<&'static str> {
        resolver().spans(text).iter().map(|s| s.kind_name()).collect()
    }

    #[test]
    fn bold_beats_percent() {
        let spans = resolver().spans("**50%增长**");
        assert_eq!(spans.len(), 1);
        assert_eq!(
            spans[0].kind,
            SpanKind::Bold {
                text: "50%增长".to_string()
            }
        );
        assert_eq!((spans[0].start, spans[0].end), (0, "**50%增长**".len()));
    }

    #[test]
    fn highlight_beats_entity() {
        assert_eq!(kinds("【小王】"), vec!["highlight"]);
    }

    #[test]
    fn link_text_is_not_rescanned() {
        assert_eq!(kinds("[+5% 详情](https://x.y/z)"), vec!["link"]);
    }

    #[test]
    fn percent_and_entity_side_by_side() {
        assert_eq!(kinds("Nora说+5%"), vec!["entity", "percent"]);
    }

    #[test]
    fn entity_overlapping_percent_is_dropped() {
        let rules = InlineRules {
            entity_names: vec!["5%增长".to_string()],
        };
        let spans = InlineResolver::new(&rules).unwrap().spans("+5%增长");
        assert_eq!(spans.len(), 1);
        assert!(matches!(
            spans[0].kind,
            SpanKind::Percent {
                sign: Sign::Positive,
                ..
            }
        ));
    }

    #[test]
    fn spans_are_sorted() {
        let spans = resolver().spans("-3% 然后 **重点** 和 【关注】");
        let starts: Vec<usize> = spans.iter().map(|s| s.start).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
        assert_eq!(spans.len(), 3);
    }

    #[test]
    fn segments_cover_the_text() {
        let text = "增长 +5%，由 Kevin 负责";
        let segments = resolver().segments(text);
        let mut pos = 0;
        for seg in &segments {
            assert_eq!(seg.start(), pos);
            pos = seg.end();
        }
        assert_eq!(pos, text.len());
        assert_eq!(segments.len(), 5);
    }

    #[test]
    fn segments_strip_stray_markers_from_gaps() {
        let segments = resolver().segments("** 注意");
        assert_eq!(
            segments,
            vec![InlineSegment::Text(PlainText {
                start: 0,
                end: "** 注意".len(),
                text: " 注意".to_string(),
            })]
        );
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(resolver().segments("").is_empty());
    }
}
