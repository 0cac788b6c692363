use crate::parsing::{blocks::ContentBlock, inline::InlineResolver};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are within 1..=6
/// - Paragraph text is non-empty; paragraph and quote text is single-line
/// - Every table row is non-empty
/// - Inline segments of every fragment are sorted, non-overlapping and
///   cover the fragment exactly
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[ContentBlock], resolver: &InlineResolver) {
    for b in blocks {
        match b {
            ContentBlock::Heading { level, .. } => {
                assert!((1..=6).contains(level), "heading level out of range: {level}");
            }
            ContentBlock::Paragraph { text } => {
                assert!(!text.is_empty(), "empty paragraph");
                assert!(!text.contains('\n'), "multi-line paragraph: {text:?}");
            }
            ContentBlock::Quote { text, .. } => {
                assert!(!text.contains('\n'), "multi-line quote: {text:?}");
            }
            ContentBlock::Table { rows, .. } => {
                assert!(rows.iter().all(|r| !r.is_empty()), "empty table row");
            }
            _ => {}
        }

        for fragment in b.inline_fragments() {
            let mut pos = 0;
            for seg in resolver.segments(fragment) {
                assert_eq!(
                    seg.start(),
                    pos,
                    "segment gap or overlap at {pos} in {fragment:?}"
                );
                assert!(seg.end() > seg.start(), "empty segment in {fragment:?}");
                pos = seg.end();
            }
            assert_eq!(pos, fragment.len(), "segments do not cover {fragment:?}");
        }
    }
}
