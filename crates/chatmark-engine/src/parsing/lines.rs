/// A reference to a single line of the input.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// Byte offset of the first character of this line in the input.
    pub offset: usize,
    /// The line text without its `\n` (and without a trailing `\r`).
    pub text: &'a str,
}

/// Returns an iterator over the `\n`-separated lines of `text`.
///
/// An empty input yields no lines; a trailing newline does not produce an
/// extra empty line.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n').enumerate().map(move |(index, raw)| {
        let start = offset;
        offset += raw.len();
        LineRef {
            index,
            offset: start,
            text: raw.trim_end_matches('\n').trim_end_matches('\r'),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        let all: Vec<_> = lines("a\nb\n").map(|l| l.text).collect();
        assert_eq!(all, vec!["a", "b"]);
    }

    #[test]
    fn offsets_point_at_line_starts() {
        let all: Vec<_> = lines("ab\n\ncd").map(|l| (l.index, l.offset, l.text)).collect();
        assert_eq!(all, vec![(0, 0, "ab"), (1, 3, ""), (2, 4, "cd")]);
    }

    #[test]
    fn carriage_return_is_dropped() {
        let all: Vec<_> = lines("a\r\nb").map(|l| l.text).collect();
        assert_eq!(all, vec!["a", "b"]);
    }
}
