//! Composable pattern matchers for lexical rules.
//!
//! A [`Pattern`] is a declarative value built from primitive matchers:
//! literals, character classes, sequences, ordered choices, repetitions,
//! and optional elements. Rule sets stay pure data; the single interpreter
//! [`Pattern::match_at`] evaluates any of them against document text.
//!
//! Matching is anchored: a match always begins exactly at the offset given
//! to `match_at`, so the only question a pattern answers is how far it
//! consumes. Repetitions are greedy and possessive - once consumed, input
//! is never given back to a later element of a sequence. Patterns must be
//! written so that a repetition's body cannot also match its terminator;
//! the built-in configurations follow this rule and
//! [`Pattern::validate`] rejects the structurally malformed cases.

use thiserror::Error;

/// A character class used by [`Pattern::Class`].
///
/// # Examples
///
/// ```
/// use glint_lang::pattern::CharClass;
///
/// assert!(CharClass::Alphabetic.matches('x'));
/// assert!(!CharClass::Alphabetic.matches('3'));
/// assert!(CharClass::OneOf("+-".to_string()).matches('-'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Any Unicode alphabetic character
    Alphabetic,
    /// Any Unicode alphanumeric character
    Alphanumeric,
    /// An ASCII decimal digit `0-9`
    AsciiDigit,
    /// An ASCII hexadecimal digit `0-9a-fA-F`
    AsciiHexDigit,
    /// One of an explicit set of characters
    OneOf(String),
    /// A character matching any of the listed classes
    Union(Vec<CharClass>),
}

impl CharClass {
    /// Returns true if `c` belongs to the class.
    pub fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Alphabetic => c.is_alphabetic(),
            CharClass::Alphanumeric => c.is_alphanumeric(),
            CharClass::AsciiDigit => c.is_ascii_digit(),
            CharClass::AsciiHexDigit => c.is_ascii_hexdigit(),
            CharClass::OneOf(set) => set.contains(c),
            CharClass::Union(classes) => classes.iter().any(|class| class.matches(c)),
        }
    }

    fn validate(&self) -> Result<(), PatternError> {
        match self {
            CharClass::OneOf(set) if set.is_empty() => Err(PatternError::EmptyCharSet),
            CharClass::Union(classes) => {
                if classes.is_empty() {
                    return Err(PatternError::EmptyCharSet);
                }
                classes.iter().try_for_each(CharClass::validate)
            }
            _ => Ok(()),
        }
    }
}

/// A structural problem in a pattern, detected at rule-set construction.
///
/// Pattern errors are configuration-time failures; a rule set containing
/// one never reaches the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A literal matcher with empty text
    #[error("literal matcher is empty")]
    EmptyLiteral,

    /// A character class with no members
    #[error("character class has no members")]
    EmptyCharSet,

    /// A sequence with no elements
    #[error("sequence has no elements")]
    EmptySequence,

    /// An ordered choice with no alternatives
    #[error("choice has no alternatives")]
    EmptyChoice,

    /// A repetition whose body can match without consuming input
    #[error("repetition body can match empty input")]
    EmptyRepeat,
}

/// A composable lexical pattern.
///
/// Patterns are interpreted by [`Pattern::match_at`]; see the module
/// documentation for the matching rules.
///
/// # Examples
///
/// ```
/// use glint_lang::pattern::{CharClass, Pattern};
///
/// // An identifier: one alphabetic head, any number of continuations.
/// let ident = Pattern::seq(vec![
///     Pattern::class(CharClass::Alphabetic),
///     Pattern::repeat(Pattern::class(CharClass::Alphanumeric)),
/// ]);
///
/// assert_eq!(ident.match_at("abc1 = 2", 0), Some(4));
/// assert_eq!(ident.match_at("abc1 = 2", 5), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Exact text
    Literal(String),
    /// A single character from a class
    Class(CharClass),
    /// All elements, in order
    Seq(Vec<Pattern>),
    /// Ordered alternatives anchored at the same offset; the alternative
    /// consuming the most characters wins, ties broken by listing order
    Choice(Vec<Pattern>),
    /// Zero or more repetitions of the body, greedy
    Repeat(Box<Pattern>),
    /// One or more repetitions of the body, greedy
    Repeat1(Box<Pattern>),
    /// The body, or nothing
    Optional(Box<Pattern>),
}

impl Pattern {
    /// Build a literal matcher.
    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    /// Build a single-character class matcher.
    pub fn class(class: CharClass) -> Self {
        Pattern::Class(class)
    }

    /// Build a sequence.
    pub fn seq(items: Vec<Pattern>) -> Self {
        Pattern::Seq(items)
    }

    /// Build an ordered choice.
    pub fn choice(alternatives: Vec<Pattern>) -> Self {
        Pattern::Choice(alternatives)
    }

    /// Build a zero-or-more repetition.
    pub fn repeat(body: Pattern) -> Self {
        Pattern::Repeat(Box::new(body))
    }

    /// Build a one-or-more repetition.
    pub fn repeat1(body: Pattern) -> Self {
        Pattern::Repeat1(Box::new(body))
    }

    /// Build an optional element.
    pub fn optional(body: Pattern) -> Self {
        Pattern::Optional(Box::new(body))
    }

    /// Match the pattern against `text` starting exactly at byte offset
    /// `start`, returning the end offset of the match.
    ///
    /// Returns `None` if the pattern does not match at `start`. `start`
    /// must lie on a character boundary within `text` (or equal its
    /// length).
    ///
    /// # Examples
    ///
    /// ```
    /// use glint_lang::pattern::Pattern;
    ///
    /// let arrow = Pattern::literal("=>");
    /// assert_eq!(arrow.match_at("x => y", 2), Some(4));
    /// assert_eq!(arrow.match_at("x => y", 0), None);
    /// ```
    pub fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        match self {
            Pattern::Literal(lit) => {
                if text[start..].starts_with(lit.as_str()) {
                    Some(start + lit.len())
                } else {
                    None
                }
            }
            Pattern::Class(class) => {
                let c = text[start..].chars().next()?;
                if class.matches(c) {
                    Some(start + c.len_utf8())
                } else {
                    None
                }
            }
            Pattern::Seq(items) => {
                let mut pos = start;
                for item in items {
                    pos = item.match_at(text, pos)?;
                }
                Some(pos)
            }
            Pattern::Choice(alternatives) => {
                let mut best: Option<usize> = None;
                for alternative in alternatives {
                    if let Some(end) = alternative.match_at(text, start) {
                        // Strictly greater keeps the earliest-listed
                        // alternative on ties.
                        if best.map_or(true, |b| end > b) {
                            best = Some(end);
                        }
                    }
                }
                best
            }
            Pattern::Repeat(body) => Some(Self::match_repeat(body, text, start)),
            Pattern::Repeat1(body) => {
                let after_first = body.match_at(text, start)?;
                Some(Self::match_repeat(body, text, after_first))
            }
            Pattern::Optional(body) => Some(body.match_at(text, start).unwrap_or(start)),
        }
    }

    /// Greedily match `body` as many times as possible from `start`.
    fn match_repeat(body: &Pattern, text: &str, start: usize) -> usize {
        let mut pos = start;
        while let Some(next) = body.match_at(text, pos) {
            if next == pos {
                // A non-consuming iteration would never terminate.
                break;
            }
            pos = next;
        }
        pos
    }

    /// Returns true if the pattern can succeed without consuming input.
    pub fn can_match_empty(&self) -> bool {
        match self {
            Pattern::Literal(lit) => lit.is_empty(),
            Pattern::Class(_) => false,
            Pattern::Seq(items) => items.iter().all(Pattern::can_match_empty),
            Pattern::Choice(alternatives) => alternatives.iter().any(Pattern::can_match_empty),
            Pattern::Repeat(_) | Pattern::Optional(_) => true,
            Pattern::Repeat1(body) => body.can_match_empty(),
        }
    }

    /// Check structural well-formedness.
    ///
    /// Rejects empty literals, empty classes, empty sequences/choices,
    /// and repetitions whose body can match empty input. Called by
    /// [`LanguageConfig::new`](crate::LanguageConfig::new) for every
    /// pattern in a rule set.
    pub fn validate(&self) -> Result<(), PatternError> {
        match self {
            Pattern::Literal(lit) => {
                if lit.is_empty() {
                    Err(PatternError::EmptyLiteral)
                } else {
                    Ok(())
                }
            }
            Pattern::Class(class) => class.validate(),
            Pattern::Seq(items) => {
                if items.is_empty() {
                    return Err(PatternError::EmptySequence);
                }
                items.iter().try_for_each(Pattern::validate)
            }
            Pattern::Choice(alternatives) => {
                if alternatives.is_empty() {
                    return Err(PatternError::EmptyChoice);
                }
                alternatives.iter().try_for_each(Pattern::validate)
            }
            Pattern::Repeat(body) | Pattern::Repeat1(body) => {
                if body.can_match_empty() {
                    return Err(PatternError::EmptyRepeat);
                }
                body.validate()
            }
            Pattern::Optional(body) => body.validate(),
        }
    }
}
