use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::ChecklistItem;

/// Checklist: `- [ ] todo` and `- [x] done` lines.
pub struct Checklist;

impl Checklist {
    fn opener() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"^-\s*\[([ xX])\]\s").expect("Invalid checklist regex"))
    }

    fn item_pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"^-\s*\[([ xX])\]\s+(.+)$").expect("Invalid checklist item regex")
        })
    }

    pub fn opens(trimmed: &str) -> bool {
        Self::opener().is_match(trimmed)
    }

    pub fn item(trimmed: &str) -> Option<ChecklistItem> {
        let caps = Self::item_pattern().captures(trimmed)?;
        Some(ChecklistItem {
            checked: caps[1].eq_ignore_ascii_case("x"),
            text: caps[2].to_string(),
        })
    }
}
