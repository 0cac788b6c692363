/// A cursor for char-by-char scanning with byte position tracking.
///
/// Positions are byte offsets into `s` and always sit on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unscanned remainder.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one char, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. The caller keeps the cursor on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
