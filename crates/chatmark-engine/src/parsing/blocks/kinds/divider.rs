/// Thematic break: three or more of `-`, `=` or `━` and nothing else.
pub struct Divider;

impl Divider {
    pub const CHARS: [char; 3] = ['-', '=', '━'];

    pub fn is_divider(trimmed: &str) -> bool {
        trimmed.chars().count() >= 3 && trimmed.chars().all(|c| Self::CHARS.contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_runs_of_marker_chars() {
        assert!(Divider::is_divider("---"));
        assert!(Divider::is_divider("====="));
        assert!(Divider::is_divider("━━━"));
    }

    #[test]
    fn rejects_short_or_spaced_runs() {
        assert!(!Divider::is_divider("--"));
        assert!(!Divider::is_divider("- - -"));
        assert!(!Divider::is_divider("---a"));
    }
}
