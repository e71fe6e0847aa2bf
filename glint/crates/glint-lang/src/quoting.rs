//! String and character quoting conventions.
//!
//! A language's string pattern is an ordered choice of self-contained
//! quoting conventions ([`QuoteStyle`]): each requires a closing quote of
//! the same convention and treats an escaped quote as non-terminating.
//! An unterminated literal at the end of the scanned range is recoverable:
//! the match extends to the end of the text and is flagged unterminated,
//! so the tokenizer can still emit a string token and the scan never
//! fails on user text mid-edit.

/// One quoting convention: an opening/closing quote character and the
/// escape character that suppresses termination.
///
/// # Examples
///
/// ```
/// use glint_lang::quoting::QuoteStyle;
///
/// let double = QuoteStyle::new('"', '\\');
/// let m = double.match_at("\"hi\" x", 0).unwrap();
/// assert_eq!(m.end, 4);
/// assert!(m.terminated);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuoteStyle {
    /// Opening and closing quote character
    pub quote: char,
    /// Escape character; the character following it never terminates
    pub escape: char,
}

/// Result of matching a quoting convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringMatch {
    /// End byte offset of the match (exclusive)
    pub end: usize,
    /// False when the closing quote was not found before end of text
    pub terminated: bool,
}

impl QuoteStyle {
    /// Create a quoting convention.
    pub const fn new(quote: char, escape: char) -> Self {
        Self { quote, escape }
    }

    /// Match this convention against `text` at byte offset `start`.
    ///
    /// Returns `None` unless the character at `start` is the opening
    /// quote. Otherwise consumes up to and including the first unescaped
    /// closing quote, or to the end of the text when unterminated.
    ///
    /// # Examples
    ///
    /// ```
    /// use glint_lang::quoting::QuoteStyle;
    ///
    /// let single = QuoteStyle::new('\'', '\\');
    /// let m = single.match_at(r"'a\'b'", 0).unwrap();
    /// assert_eq!(m.end, 6);
    ///
    /// let open = single.match_at("'oops", 0).unwrap();
    /// assert!(!open.terminated);
    /// assert_eq!(open.end, 5);
    /// ```
    pub fn match_at(&self, text: &str, start: usize) -> Option<StringMatch> {
        let mut chars = text[start..].char_indices();
        let (_, first) = chars.next()?;
        if first != self.quote {
            return None;
        }

        let mut skip_next = false;
        for (offset, c) in chars {
            if skip_next {
                skip_next = false;
                continue;
            }
            if c == self.escape {
                skip_next = true;
            } else if c == self.quote {
                return Some(StringMatch {
                    end: start + offset + c.len_utf8(),
                    terminated: true,
                });
            }
        }

        Some(StringMatch {
            end: text.len(),
            terminated: false,
        })
    }
}

/// A string pattern: an ordered choice of quoting conventions.
///
/// Conventions are tried in listing order; since each is anchored on its
/// own opening quote, at most one can open at a given offset.
///
/// # Examples
///
/// ```
/// use glint_lang::quoting::{QuoteStyle, StringPattern};
///
/// let strings = StringPattern::new(vec![
///     QuoteStyle::new('"', '\\'),
///     QuoteStyle::new('\'', '\\'),
/// ]);
/// assert!(strings.match_at("'x'", 0).is_some());
/// assert!(strings.match_at("`x`", 0).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringPattern {
    /// Quoting conventions, in priority order
    pub styles: Vec<QuoteStyle>,
}

impl StringPattern {
    /// Create a string pattern from quoting conventions.
    pub fn new(styles: Vec<QuoteStyle>) -> Self {
        Self { styles }
    }

    /// Match any convention at byte offset `start`.
    pub fn match_at(&self, text: &str, start: usize) -> Option<StringMatch> {
        self.styles
            .iter()
            .find_map(|style| style.match_at(text, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_double_quoted() {
        let style = QuoteStyle::new('"', '\\');
        let m = style.match_at("\"hello\" rest", 0).unwrap();
        assert_eq!(m.end, 7);
        assert!(m.terminated);
    }

    #[test]
    fn test_wrong_opening_quote() {
        let style = QuoteStyle::new('"', '\\');
        assert_eq!(style.match_at("'hello'", 0), None);
    }

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        let style = QuoteStyle::new('"', '\\');
        let text = r#""a\"b" tail"#;
        let m = style.match_at(text, 0).unwrap();
        assert_eq!(&text[..m.end], r#""a\"b""#);
        assert!(m.terminated);
    }

    #[test]
    fn test_escaped_escape_then_quote_terminates() {
        let style = QuoteStyle::new('"', '\\');
        let text = r#""a\\" tail"#;
        let m = style.match_at(text, 0).unwrap();
        assert_eq!(&text[..m.end], r#""a\\""#);
        assert!(m.terminated);
    }

    #[test]
    fn test_unterminated_reaches_end() {
        let style = QuoteStyle::new('"', '\\');
        let m = style.match_at("\"never closed", 0).unwrap();
        assert_eq!(m.end, 13);
        assert!(!m.terminated);
    }

    #[test]
    fn test_trailing_escape_is_unterminated() {
        let style = QuoteStyle::new('"', '\\');
        let m = style.match_at("\"abc\\", 0).unwrap();
        assert!(!m.terminated);
        assert_eq!(m.end, 5);
    }

    #[test]
    fn test_empty_string_literal() {
        let style = QuoteStyle::new('\'', '\\');
        let m = style.match_at("''x", 0).unwrap();
        assert_eq!(m.end, 2);
        assert!(m.terminated);
    }

    #[test]
    fn test_match_not_anchored_elsewhere() {
        let style = QuoteStyle::new('"', '\\');
        assert_eq!(style.match_at("x\"y\"", 0), None);
        assert!(style.match_at("x\"y\"", 1).is_some());
    }

    #[test]
    fn test_pattern_tries_styles_in_order() {
        let strings = StringPattern::new(vec![
            QuoteStyle::new('"', '\\'),
            QuoteStyle::new('\'', '\\'),
            QuoteStyle::new('`', '\\'),
        ]);
        let template = strings.match_at("`a${b}`", 0).unwrap();
        assert_eq!(template.end, 7);
        assert!(template.terminated);
    }

    #[test]
    fn test_multibyte_content() {
        let style = QuoteStyle::new('"', '\\');
        let text = "\"héllo\" x";
        let m = style.match_at(text, 0).unwrap();
        assert_eq!(&text[..m.end], "\"héllo\"");
    }
}
