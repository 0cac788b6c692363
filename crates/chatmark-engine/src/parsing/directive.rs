//! Bracketed directive tags such as `[chart:{...}]` or `[kpi:{...}]`.
//!
//! The block parser leaves these tags in block text; this scanner finds them
//! for callers that render them.

use serde::Serialize;

use super::inline::cursor::Cursor;

/// A `[name:{...}]` tag found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive<'a> {
    /// Tag name, lowercase ASCII letters and `-`.
    pub name: &'a str,
    /// Byte offset of the opening `[`.
    pub start: usize,
    /// Byte offset just past the closing `]`.
    pub end: usize,
    /// The balanced `{...}` object, braces included.
    pub payload: &'a str,
}

impl Directive<'_> {
    pub const OPEN: char = '[';
    pub const NAME_END: char = ':';
    pub const CLOSE: char = ']';
}

/// Finds every well-formed directive in `text`, left to right.
///
/// Braces inside JSON strings are ignored while balancing. A tag whose
/// object never closes, or whose object is not followed directly by `]`,
/// is not reported.
pub fn find_directives(text: &str) -> Vec<Directive<'_>> {
    let mut out = vec![];
    let mut cur = Cursor::new(text);
    while !cur.eof() {
        if cur.peek() == Some(Directive::OPEN) {
            let mut probe = cur.clone();
            if let Some(directive) = try_parse_directive(&mut probe) {
                out.push(directive);
                cur = probe;
                continue;
            }
        }
        cur.bump();
    }
    out
}

fn try_parse_directive<'a>(cur: &mut Cursor<'a>) -> Option<Directive<'a>> {
    let s = cur.s;
    let start = cur.pos();
    cur.bump(); // [

    let name_start = cur.pos();
    while cur.peek().is_some_and(|c| c.is_ascii_lowercase() || c == '-') {
        cur.bump();
    }
    let name = &s[name_start..cur.pos()];
    if name.is_empty() || cur.bump() != Some(Directive::NAME_END) {
        return None;
    }
    while cur.peek().is_some_and(char::is_whitespace) {
        cur.bump();
    }

    let payload_start = cur.pos();
    scan_balanced_object(cur)?;
    let payload = &s[payload_start..cur.pos()];

    if cur.bump() != Some(Directive::CLOSE) {
        return None;
    }
    Some(Directive {
        name,
        start,
        end: cur.pos(),
        payload,
    })
}

/// Advances past one `{...}` object. Returns `None` if the cursor is not on
/// `{` or the object is unterminated.
fn scan_balanced_object(cur: &mut Cursor<'_>) -> Option<()> {
    if cur.peek() != Some('{') {
        return None;
    }
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    while let Some(c) = cur.bump() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(());
                }
            }
            _ => {}
        }
    }
    None
}
