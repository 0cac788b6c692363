use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one to six `#` followed by whitespace and a title.
pub struct Heading;

impl Heading {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"))
    }

    /// Returns `(level, title)` with `**` emphasis markers removed from the title.
    pub fn parse(trimmed: &str) -> Option<(u8, String)> {
        let caps = Self::pattern().captures(trimmed)?;
        let level = caps[1].len() as u8;
        let title = caps[2].replace("**", "").trim().to_string();
        Some((level, title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_follow_hash_count() {
        assert_eq!(Heading::parse("# A"), Some((1, "A".to_string())));
        assert_eq!(Heading::parse("###### F"), Some((6, "F".to_string())));
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(Heading::parse("####### G"), None);
    }

    #[test]
    fn requires_whitespace_after_marker() {
        assert_eq!(Heading::parse("#hashtag"), None);
    }

    #[test]
    fn emphasis_is_stripped() {
        assert_eq!(
            Heading::parse("## **核心结论**"),
            Some((2, "核心结论".to_string()))
        );
    }
}
