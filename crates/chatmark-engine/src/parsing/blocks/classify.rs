use crate::parsing::lines::LineRef;

/// Leading whitespace of a line, split into tabs and other whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indent {
    pub tabs: usize,
    pub spaces: usize,
}

impl Indent {
    /// Nesting depth: tab count if any tabs are present, else one level per
    /// two spaces.
    pub fn level(self) -> usize {
        if self.tabs > 0 {
            self.tabs
        } else {
            self.spaces / 2
        }
    }
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// The line as written (no newline).
    pub raw: &'a str,
    /// The line with surrounding whitespace removed.
    pub trimmed: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Leading whitespace of `raw`.
    pub indent: Indent,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = lr.text.trim();
        let leading = &lr.text[..lr.text.len() - lr.text.trim_start().len()];
        let tabs = leading.chars().filter(|c| *c == '\t').count();
        let spaces = leading.chars().count() - tabs;

        LineClass {
            index: lr.index,
            raw: lr.text,
            trimmed,
            is_blank: trimmed.is_empty(),
            indent: Indent { tabs, spaces },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(text: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(&LineRef {
            index: 0,
            offset: 0,
            text,
        })
    }

    #[rstest]
    #[case("- a", 0)]
    #[case(" - a", 0)]
    #[case("  - a", 1)]
    #[case("    - a", 2)]
    #[case("     - a", 2)]
    #[case("\t- a", 1)]
    #[case("\t\t- a", 2)]
    #[case("\t   - a", 1)]
    fn indent_levels(#[case] line: &str, #[case] level: usize) {
        assert_eq!(classify(line).indent.level(), level);
    }

    #[test]
    fn whitespace_only_is_blank() {
        let lc = classify(" \t ");
        assert!(lc.is_blank);
        assert_eq!(lc.trimmed, "");
    }

    #[test]
    fn trimmed_drops_both_ends() {
        let lc = classify("  # Title  ");
        assert_eq!(lc.trimmed, "# Title");
        assert_eq!(lc.raw, "  # Title  ");
    }
}
