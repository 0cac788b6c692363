use std::sync::OnceLock;

use regex::Regex;

/// Pipe table: a header line containing `|` followed by a separator line.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    fn separator() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"^\|?[\s\-:|]+\|?$").expect("Invalid table separator regex")
        })
    }

    /// Whether `line` is a header/body separator such as `|---|:--:|`.
    pub fn is_separator(line: &str) -> bool {
        let line = line.trim();
        !line.is_empty() && Self::separator().is_match(line)
    }

    /// A table opens on a line containing `|` whose next line is a separator.
    pub fn opens(trimmed: &str, next: Option<&str>) -> bool {
        trimmed.contains(Self::PIPE) && next.is_some_and(Self::is_separator)
    }

    /// Whether a line continues the table body.
    pub fn continues(trimmed: &str) -> bool {
        trimmed.contains(Self::PIPE)
    }

    /// Splits a row on `|`, trims cells and drops the empty cells produced by
    /// leading and trailing pipes. Inner empty cells are kept so columns line up.
    pub fn split_row(line: &str) -> Vec<String> {
        let mut cells: Vec<&str> = line.split(Self::PIPE).map(str::trim).collect();
        while cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells.into_iter().map(str::to_string).collect()
    }
}
