/// Fenced code block: opens and closes on a line starting with three backticks.
pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// If `trimmed` is a fence line, returns the language tag after the marker.
    pub fn sig(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::MARKER).map(str::trim)
    }

    /// Any fence line closes an open fence, whatever its tag.
    pub fn closes(trimmed: &str) -> bool {
        trimmed.starts_with(Self::MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_fence_with_language() {
        assert_eq!(CodeFence::sig("```sql"), Some("sql"));
    }

    #[test]
    fn detect_fence_without_language() {
        assert_eq!(CodeFence::sig("```"), Some(""));
    }

    #[test]
    fn language_is_trimmed() {
        assert_eq!(CodeFence::sig("```  chart "), Some("chart"));
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello ```"), None);
        assert!(!CodeFence::closes("``"));
    }
}
