use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::{LineClass, ListItem};

/// Bullet (`•`, `-`, `*`) and ordinal (`1.`) lists with indentation levels.
pub struct List;

fn bullet() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[•\-\*]\s").expect("Invalid bullet regex"))
}

fn ordinal() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid ordinal regex"))
}

fn item_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([•\-\*]|\d+\.)\s+(.+)$").expect("Invalid list item regex"))
}

impl List {
    /// If `trimmed` opens a list, returns whether the list is ordered.
    pub fn opens(trimmed: &str) -> Option<bool> {
        if ordinal().is_match(trimmed) {
            Some(true)
        } else if bullet().is_match(trimmed) {
            Some(false)
        } else {
            None
        }
    }

    /// Parses an item line; the level comes from the line's indentation.
    pub fn item(lc: &LineClass) -> Option<ListItem> {
        let caps = item_pattern().captures(lc.trimmed)?;
        Some(ListItem {
            text: caps[2].to_string(),
            level: lc.indent.level(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::MarkdownLineClassifier;
    use crate::parsing::lines::LineRef;
    use rstest::rstest;

    fn item(text: &str) -> Option<ListItem> {
        let lc = MarkdownLineClassifier.classify(&LineRef {
            index: 0,
            offset: 0,
            text,
        });
        List::item(&lc)
    }

    #[rstest]
    #[case("- a", Some(false))]
    #[case("* a", Some(false))]
    #[case("• a", Some(false))]
    #[case("12. a", Some(true))]
    #[case("-a", None)]
    #[case("1.5 a", None)]
    fn opener_shapes(#[case] line: &str, #[case] expected: Option<bool>) {
        assert_eq!(List::opens(line), expected);
    }

    #[test]
    fn item_text_and_level() {
        assert_eq!(
            item("    - deep"),
            Some(ListItem {
                text: "deep".to_string(),
                level: 2
            })
        );
    }

    #[test]
    fn ordinal_marker_is_dropped() {
        assert_eq!(item("3. third").unwrap().text, "third");
    }
}
