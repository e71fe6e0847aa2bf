//! Language configuration - the immutable lexical rule set.
//!
//! A [`LanguageConfig`] is constructed once per language from named,
//! enumerated options ([`LanguageOptions`]), validated structurally, and
//! then shared read-only across every tokenization run. Malformed
//! configurations fail at construction - before any document is opened
//! with that language - and never at scan time.
//!
//! Configuration requirement: the identifier and operator patterns of a
//! rule set must not overlap in the character sets they can start with.
//! The engine tries identifier before operator at each offset, so an
//! overlapping configuration silently shadows the operator pattern; rule
//! sets are expected to keep the two classes disjoint, as the built-in
//! configurations do.

use std::fmt;
use std::sync::Arc;

use glint_util::FxHashSet;
use thiserror::Error;

use crate::pattern::{Pattern, PatternError};
use crate::quoting::{QuoteStyle, StringPattern};

/// An opaque capability handle to an external language-analysis service.
///
/// The engine stores and passes the handle through unchanged; nothing in
/// the tokenizer calls it.
pub trait LanguageService: fmt::Debug + Send + Sync {}

/// Errors surfaced at rule-set construction or registration time.
///
/// A caller must not attempt to tokenize with a configuration that failed
/// construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The language name is empty
    #[error("language name is empty")]
    EmptyName,

    /// A lexical pattern is structurally malformed
    #[error("malformed {field} pattern: {source}")]
    Pattern {
        /// Which pattern field failed ("identifier", "operator", "number")
        field: &'static str,
        /// The structural problem
        source: PatternError,
    },

    /// The string pattern has no quoting conventions
    #[error("string pattern has no quoting conventions")]
    EmptyStringPattern,

    /// The single-line comment marker is empty
    #[error("single-line comment marker is empty")]
    EmptyCommentMarker,

    /// A nested comment delimiter is empty
    #[error("nested comment delimiter is empty")]
    EmptyNestedCommentDelimiter,

    /// Nested comment open and close delimiters are identical
    #[error("nested comment open and close delimiters are identical")]
    IdenticalNestedCommentDelimiters,

    /// A language with this name is already registered
    #[error("language `{0}` is already registered")]
    DuplicateLanguage(String),
}

/// Named, enumerated options for constructing a [`LanguageConfig`].
///
/// # Examples
///
/// ```
/// use glint_lang::{LanguageConfig, LanguageOptions};
/// use glint_lang::pattern::{CharClass, Pattern};
/// use glint_lang::quoting::{QuoteStyle, StringPattern};
///
/// let options = LanguageOptions {
///     name: "Ini".to_string(),
///     supports_square_brackets: true,
///     supports_curly_brackets: false,
///     string_pattern: StringPattern::new(vec![QuoteStyle::new('"', '\\')]),
///     character_pattern: None,
///     number_pattern: Pattern::repeat1(Pattern::class(CharClass::AsciiDigit)),
///     single_line_comment: Some(";".to_string()),
///     nested_comment: None,
///     identifier_pattern: Pattern::seq(vec![
///         Pattern::class(CharClass::Alphabetic),
///         Pattern::repeat(Pattern::class(CharClass::Alphanumeric)),
///     ]),
///     operator_pattern: Pattern::literal("="),
///     reserved_identifiers: vec![],
///     reserved_operators: vec!["=".to_string()],
///     language_service: None,
/// };
///
/// let config = LanguageConfig::new(options).unwrap();
/// assert!(config.is_reserved_operator("="));
/// ```
#[derive(Clone, Debug)]
pub struct LanguageOptions {
    /// Language name; the registry's unique key
    pub name: String,
    /// Whether square brackets are recognized as bracket tokens
    pub supports_square_brackets: bool,
    /// Whether curly brackets are recognized as bracket tokens
    pub supports_curly_brackets: bool,
    /// String literal quoting conventions
    pub string_pattern: StringPattern,
    /// Character literal convention, absent for languages without them
    pub character_pattern: Option<QuoteStyle>,
    /// Numeric literal pattern
    pub number_pattern: Pattern,
    /// Single-line comment marker, e.g. `//`
    pub single_line_comment: Option<String>,
    /// Nested comment delimiters, e.g. `("/*", "*/")`
    pub nested_comment: Option<(String, String)>,
    /// Identifier pattern
    pub identifier_pattern: Pattern,
    /// Operator pattern
    pub operator_pattern: Pattern,
    /// Reserved identifiers (keywords)
    pub reserved_identifiers: Vec<String>,
    /// Reserved operators
    pub reserved_operators: Vec<String>,
    /// Opaque language-service capability, passed through unchanged
    pub language_service: Option<Arc<dyn LanguageService>>,
}

/// The immutable lexical rule set for one language.
///
/// Constructed by [`LanguageConfig::new`] (validated) or provided by a
/// built-in such as [`LanguageConfig::javascript`]. Multiple tokenization
/// runs may share one instance concurrently; it is never mutated after
/// construction.
#[derive(Clone, Debug)]
pub struct LanguageConfig {
    /// Language name; the registry's unique key
    pub name: String,
    /// Whether square brackets are recognized as bracket tokens
    pub supports_square_brackets: bool,
    /// Whether curly brackets are recognized as bracket tokens
    pub supports_curly_brackets: bool,
    /// String literal quoting conventions
    pub string_pattern: StringPattern,
    /// Character literal convention, absent for languages without them
    pub character_pattern: Option<QuoteStyle>,
    /// Numeric literal pattern
    pub number_pattern: Pattern,
    /// Single-line comment marker
    pub single_line_comment: Option<String>,
    /// Nested comment delimiters
    pub nested_comment: Option<(String, String)>,
    /// Identifier pattern
    pub identifier_pattern: Pattern,
    /// Operator pattern
    pub operator_pattern: Pattern,
    /// Reserved identifiers, checked only after identifier-shape matching
    pub reserved_identifiers: FxHashSet<String>,
    /// Reserved operators, checked only after operator-shape matching
    pub reserved_operators: FxHashSet<String>,
    /// Opaque language-service capability
    pub language_service: Option<Arc<dyn LanguageService>>,
}

impl LanguageConfig {
    /// Construct a validated rule set from enumerated options.
    ///
    /// Validation is structural only: pattern well-formedness and
    /// non-empty comment delimiters. Semantic pattern quality (for
    /// example keeping identifier and operator character sets disjoint)
    /// is the configurer's responsibility.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first structural problem
    /// found. A configuration that fails here must not be used for
    /// tokenization.
    pub fn new(options: LanguageOptions) -> Result<Self, ConfigError> {
        if options.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        validate_pattern("identifier", &options.identifier_pattern)?;
        validate_pattern("operator", &options.operator_pattern)?;
        validate_pattern("number", &options.number_pattern)?;

        if options.string_pattern.styles.is_empty() {
            return Err(ConfigError::EmptyStringPattern);
        }

        if let Some(marker) = &options.single_line_comment {
            if marker.is_empty() {
                return Err(ConfigError::EmptyCommentMarker);
            }
        }

        if let Some((open, close)) = &options.nested_comment {
            if open.is_empty() || close.is_empty() {
                return Err(ConfigError::EmptyNestedCommentDelimiter);
            }
            if open == close {
                return Err(ConfigError::IdenticalNestedCommentDelimiters);
            }
        }

        Ok(Self {
            name: options.name,
            supports_square_brackets: options.supports_square_brackets,
            supports_curly_brackets: options.supports_curly_brackets,
            string_pattern: options.string_pattern,
            character_pattern: options.character_pattern,
            number_pattern: options.number_pattern,
            single_line_comment: options.single_line_comment,
            nested_comment: options.nested_comment,
            identifier_pattern: options.identifier_pattern,
            operator_pattern: options.operator_pattern,
            reserved_identifiers: options.reserved_identifiers.into_iter().collect(),
            reserved_operators: options.reserved_operators.into_iter().collect(),
            language_service: options.language_service,
        })
    }

    /// Exact, case-sensitive membership test against the reserved
    /// identifier set.
    #[inline]
    pub fn is_reserved_identifier(&self, text: &str) -> bool {
        self.reserved_identifiers.contains(text)
    }

    /// Exact, case-sensitive membership test against the reserved
    /// operator set.
    #[inline]
    pub fn is_reserved_operator(&self, text: &str) -> bool {
        self.reserved_operators.contains(text)
    }
}

fn validate_pattern(field: &'static str, pattern: &Pattern) -> Result<(), ConfigError> {
    pattern
        .validate()
        .map_err(|source| ConfigError::Pattern { field, source })
}
