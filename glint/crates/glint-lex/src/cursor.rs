//! Range-bounded cursor for traversing document text.
//!
//! The cursor walks a byte range of a document character by character.
//! It never reads past its limit, so a tokenization run scoped to an
//! edited region cannot leak into text a concurrent consumer still
//! considers stable.

/// A cursor over a byte range of document text.
///
/// The cursor maintains the current byte position and provides methods
/// for advancing, peeking, and consuming expected text. Positions are
/// absolute document offsets; the cursor only moves forward.
///
/// # Example
///
/// ```
/// use glint_lex::cursor::Cursor;
///
/// let source = "let x = 42;";
/// let mut cursor = Cursor::new(source, 0..source.len());
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
pub struct Cursor<'a> {
    /// The full document text.
    source: &'a str,

    /// Current byte position in the document.
    position: usize,

    /// Exclusive end of the scanned range.
    limit: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor over `range` of `source`.
    ///
    /// The range is clamped to the source length. Both ends must lie on
    /// character boundaries.
    pub fn new(source: &'a str, range: std::ops::Range<usize>) -> Self {
        let limit = range.end.min(source.len());
        let position = range.start.min(limit);
        debug_assert!(source.is_char_boundary(position));
        debug_assert!(source.is_char_boundary(limit));
        Self {
            source,
            position,
            limit,
        }
    }

    /// Returns the current character, or '\0' at the end of the range.
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.limit {
            return '\0';
        }
        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns true if the cursor has reached the end of its range.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.limit
    }

    /// Returns true if the text at the cursor starts with `expected`,
    /// entirely within the range.
    #[inline]
    pub fn starts_with(&self, expected: &str) -> bool {
        self.position + expected.len() <= self.limit
            && self.source[self.position..].starts_with(expected)
    }

    /// Advances the cursor to the next character.
    ///
    /// Does nothing if already at the end of the range.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.limit {
            return;
        }
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances the cursor by `count` bytes, clamped to the range end.
    ///
    /// `count` must keep the position on a character boundary; callers
    /// advance by the byte length of text they have already matched.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.position = (self.position + count).min(self.limit);
        debug_assert!(self.source.is_char_boundary(self.position));
    }

    /// Move the cursor to an absolute position within the range.
    ///
    /// The target must not move backwards and must lie on a character
    /// boundary.
    #[inline]
    pub fn advance_to(&mut self, position: usize) {
        debug_assert!(position >= self.position);
        self.position = position.min(self.limit);
        debug_assert!(self.source.is_char_boundary(self.position));
    }

    /// Matches and consumes the expected text if present within range.
    ///
    /// Returns true if the text was matched and consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use glint_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>", 0..2);
    /// assert!(cursor.match_str("=>"));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_str(&mut self, expected: &str) -> bool {
        if self.starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    /// Returns the current byte position in the document.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the exclusive end of the scanned range.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the document text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the document text truncated at the range limit.
    ///
    /// Pattern matching runs against this slice so a match can never
    /// extend past the range end.
    #[inline]
    pub fn bounded_text(&self) -> &'a str {
        &self.source[..self.limit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 42;", 0..11);
        assert_eq!(cursor.current_char(), 'l');
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc", 0..3);
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_advance_utf8() {
        let source = "αβγ";
        let mut cursor = Cursor::new(source, 0..source.len());
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_range_limits_scan() {
        let mut cursor = Cursor::new("abcdef", 1..4);
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_starts_with_respects_limit() {
        let cursor = Cursor::new("/* x */", 0..1);
        // The delimiter crosses the range end, so it does not match.
        assert!(!cursor.starts_with("/*"));
    }

    #[test]
    fn test_match_str() {
        let mut cursor = Cursor::new("=> x", 0..4);
        assert!(cursor.match_str("=>"));
        assert!(!cursor.match_str("=>"));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_advance_bytes_clamped() {
        let mut cursor = Cursor::new("abc", 0..3);
        cursor.advance_bytes(10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("let x", 0..5);
        cursor.advance_bytes(3);
        assert_eq!(cursor.slice_from(0), "let");
    }

    #[test]
    fn test_empty_range() {
        let cursor = Cursor::new("abc", 2..2);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_bounded_text() {
        let cursor = Cursor::new("abcdef", 1..4);
        assert_eq!(cursor.bounded_text(), "abcd");
    }
}
