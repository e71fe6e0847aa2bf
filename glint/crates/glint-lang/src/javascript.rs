//! Built-in language configuration for JavaScript.
//!
//! All of this is data: keyword lists, operator literals, and pattern
//! values interpreted by the generic engine. Nothing here adds behavior.

use std::sync::Arc;

use crate::config::{LanguageConfig, LanguageService};
use crate::pattern::{CharClass, Pattern};
use crate::quoting::{QuoteStyle, StringPattern};

const JAVASCRIPT_RESERVED_IDENTIFIERS: &[&str] = &[
    // Keywords
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "implements", "import", "in", "instanceof", "interface", "let", "new", "null", "package",
    "private", "protected", "public", "return", "super", "switch", "static", "this", "throw",
    "try", "true", "typeof", "var", "void", "while", "with", "yield",
    // ES6+ keywords
    "await", "async", "of", "as",
    // Future reserved words
    "abstract", "arguments", "boolean", "byte", "char", "double", "final", "float", "goto",
    "int", "long", "native", "short", "synchronized", "throws", "transient", "volatile",
];

const JAVASCRIPT_RESERVED_OPERATORS: &[&str] = &[
    // Basic operators
    "+", "-", "*", "/", "%", "=", "!", "&", "|", "^", "~", "?", ":",
    // Compound operators
    "+=", "-=", "*=", "/=", "%=", "&&", "||", "??",
    // Comparison operators
    "==", "===", "!=", "!==", "<", ">", "<=", ">=",
    // Other symbols
    ".", ",", ";", "(", ")", "[", "]", "{", "}", "=>", "...", "`",
];

/// Characters that can start a general operator run.
///
/// `?`, `.` and `:` are deliberately absent: their multi-character forms
/// (`?.`, `??`, `...`, `=>`) are explicit literals so that an
/// unconfigured combination such as `??=` falls apart into `??` then `=`
/// instead of merging into one run.
const OPERATOR_HEAD_CHARS: &str = "+-*/%=!<>&|^~";

/// Characters that can continue a general operator run.
const OPERATOR_CONTINUE_CHARS: &str = "=&|<>+-*";

/// Decimal digits with `_` separators permitted after the first digit.
fn decimal_digits() -> Pattern {
    Pattern::seq(vec![
        Pattern::class(CharClass::AsciiDigit),
        Pattern::repeat(Pattern::class(CharClass::Union(vec![
            CharClass::AsciiDigit,
            CharClass::OneOf("_".to_string()),
        ]))),
    ])
}

/// `[eE][+-]?digits` exponent suffix.
fn exponent() -> Pattern {
    Pattern::seq(vec![
        Pattern::class(CharClass::OneOf("eE".to_string())),
        Pattern::optional(Pattern::class(CharClass::OneOf("+-".to_string()))),
        decimal_digits(),
    ])
}

fn radix_digits(prefix_chars: &str, digit_chars: CharClass) -> Pattern {
    Pattern::seq(vec![
        Pattern::literal("0"),
        Pattern::class(CharClass::OneOf(prefix_chars.to_string())),
        Pattern::repeat1(Pattern::class(CharClass::Union(vec![
            digit_chars,
            CharClass::OneOf("_".to_string()),
        ]))),
    ])
}

fn number_pattern() -> Pattern {
    Pattern::seq(vec![
        // Optional leading negation
        Pattern::optional(Pattern::literal("-")),
        Pattern::choice(vec![
            // Binary (0b)
            radix_digits("bB", CharClass::OneOf("01".to_string())),
            // Octal (0o)
            radix_digits("oO", CharClass::OneOf("01234567".to_string())),
            // Hexadecimal (0x)
            radix_digits("xX", CharClass::AsciiHexDigit),
            // Fraction with optional exponent
            Pattern::seq(vec![
                decimal_digits(),
                Pattern::literal("."),
                decimal_digits(),
                Pattern::optional(exponent()),
            ]),
            // Integer with optional exponent
            Pattern::seq(vec![decimal_digits(), Pattern::optional(exponent())]),
            // BigInt
            Pattern::seq(vec![decimal_digits(), Pattern::literal("n")]),
        ]),
    ])
}

fn identifier_pattern() -> Pattern {
    let continuation = Pattern::repeat(Pattern::class(CharClass::Union(vec![
        CharClass::Alphanumeric,
        CharClass::OneOf("_$".to_string()),
    ])));
    Pattern::choice(vec![
        // Standard identifier
        Pattern::seq(vec![
            Pattern::class(CharClass::Alphabetic),
            continuation.clone(),
        ]),
        // Dollar sign identifiers
        Pattern::seq(vec![Pattern::literal("$"), continuation.clone()]),
        // Underscore identifiers
        Pattern::seq(vec![Pattern::literal("_"), continuation]),
    ])
}

fn operator_pattern() -> Pattern {
    Pattern::choice(vec![
        // General operator run
        Pattern::seq(vec![
            Pattern::class(CharClass::OneOf(OPERATOR_HEAD_CHARS.to_string())),
            Pattern::repeat(Pattern::class(CharClass::OneOf(
                OPERATOR_CONTINUE_CHARS.to_string(),
            ))),
        ]),
        // Arrow function
        Pattern::literal("=>"),
        // Spread/rest operator
        Pattern::literal("..."),
        // Optional chaining
        Pattern::literal("?."),
        // Nullish coalescing
        Pattern::literal("??"),
        // Single-character forms outside the run classes
        Pattern::literal("?"),
        Pattern::literal(":"),
        Pattern::literal("."),
        Pattern::literal(","),
        Pattern::literal(";"),
    ])
}

impl LanguageConfig {
    /// Language configuration for JavaScript.
    pub fn javascript() -> LanguageConfig {
        Self::javascript_with_service(None)
    }

    /// Language configuration for JavaScript with an attached
    /// language-service capability.
    pub fn javascript_with_service(
        language_service: Option<Arc<dyn LanguageService>>,
    ) -> LanguageConfig {
        LanguageConfig {
            name: "JavaScript".to_string(),
            supports_square_brackets: true,
            supports_curly_brackets: true,
            // Single and double quoted strings, plus template literals
            string_pattern: StringPattern::new(vec![
                QuoteStyle::new('"', '\\'),
                QuoteStyle::new('\'', '\\'),
                QuoteStyle::new('`', '\\'),
            ]),
            // JavaScript doesn't have character literals
            character_pattern: None,
            number_pattern: number_pattern(),
            single_line_comment: Some("//".to_string()),
            nested_comment: Some(("/*".to_string(), "*/".to_string())),
            identifier_pattern: identifier_pattern(),
            operator_pattern: operator_pattern(),
            reserved_identifiers: JAVASCRIPT_RESERVED_IDENTIFIERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            reserved_operators: JAVASCRIPT_RESERVED_OPERATORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            language_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_len(text: &str) -> Option<usize> {
        LanguageConfig::javascript().number_pattern.match_at(text, 0)
    }

    fn identifier_len(text: &str) -> Option<usize> {
        LanguageConfig::javascript()
            .identifier_pattern
            .match_at(text, 0)
    }

    fn operator_len(text: &str) -> Option<usize> {
        LanguageConfig::javascript()
            .operator_pattern
            .match_at(text, 0)
    }

    #[test]
    fn test_patterns_are_wellformed() {
        let config = LanguageConfig::javascript();
        assert!(config.identifier_pattern.validate().is_ok());
        assert!(config.operator_pattern.validate().is_ok());
        assert!(config.number_pattern.validate().is_ok());
    }

    #[test]
    fn test_number_radix_forms() {
        assert_eq!(number_len("0b1010"), Some(6));
        assert_eq!(number_len("0o777"), Some(5));
        assert_eq!(number_len("0xFF"), Some(4));
        assert_eq!(number_len("0X1f"), Some(4));
    }

    #[test]
    fn test_number_decimal_forms() {
        assert_eq!(number_len("42"), Some(2));
        assert_eq!(number_len("3.14"), Some(4));
        assert_eq!(number_len("3.14e10"), Some(7));
        assert_eq!(number_len("2e-3"), Some(4));
        assert_eq!(number_len("-7"), Some(2));
    }

    #[test]
    fn test_number_bigint_suffix() {
        assert_eq!(number_len("1_000n"), Some(6));
        assert_eq!(number_len("9n"), Some(2));
    }

    #[test]
    fn test_number_separators() {
        assert_eq!(number_len("1_000_000"), Some(9));
        assert_eq!(number_len("0xDE_AD"), Some(7));
    }

    #[test]
    fn test_number_rejects_non_numbers() {
        assert_eq!(number_len("x1"), None);
        assert_eq!(number_len("_1"), None);
    }

    #[test]
    fn test_identifier_forms() {
        assert_eq!(identifier_len("camelCase"), Some(9));
        assert_eq!(identifier_len("$jquery"), Some(7));
        assert_eq!(identifier_len("_private"), Some(8));
        assert_eq!(identifier_len("_"), Some(1));
        assert_eq!(identifier_len("$"), Some(1));
        assert_eq!(identifier_len("a1_b$"), Some(5));
    }

    #[test]
    fn test_identifier_rejects_digit_head() {
        assert_eq!(identifier_len("1abc"), None);
    }

    #[test]
    fn test_operator_runs() {
        assert_eq!(operator_len("==="), Some(3));
        assert_eq!(operator_len("!=="), Some(3));
        assert_eq!(operator_len("&&"), Some(2));
        assert_eq!(operator_len("+="), Some(2));
        assert_eq!(operator_len("="), Some(1));
    }

    #[test]
    fn test_operator_literals() {
        assert_eq!(operator_len("=>"), Some(2));
        assert_eq!(operator_len("..."), Some(3));
        assert_eq!(operator_len("?."), Some(2));
        assert_eq!(operator_len("??"), Some(2));
        assert_eq!(operator_len("?x"), Some(1));
        assert_eq!(operator_len(":"), Some(1));
    }

    #[test]
    fn test_unconfigured_run_falls_apart() {
        // `??=` is not a configured operator: the longest match at the
        // start is `??`, leaving `=` for the next scan position.
        assert_eq!(operator_len("??="), Some(2));
        assert_eq!(operator_len("="), Some(1));
    }

    #[test]
    fn test_spread_beats_dot() {
        assert_eq!(operator_len("...rest"), Some(3));
        assert_eq!(operator_len(".x"), Some(1));
    }

    #[test]
    fn test_reserved_sets() {
        let config = LanguageConfig::javascript();
        assert!(config.is_reserved_identifier("function"));
        assert!(config.is_reserved_identifier("await"));
        assert!(config.is_reserved_identifier("volatile"));
        assert!(!config.is_reserved_identifier("functionX"));
        assert!(config.is_reserved_operator("=>"));
        assert!(config.is_reserved_operator("==="));
        assert!(!config.is_reserved_operator("??="));
    }

    #[test]
    fn test_string_conventions() {
        let config = LanguageConfig::javascript();
        assert!(config.string_pattern.match_at("\"x\"", 0).is_some());
        assert!(config.string_pattern.match_at("'x'", 0).is_some());
        assert!(config.string_pattern.match_at("`x`", 0).is_some());
        assert!(config.string_pattern.match_at("x", 0).is_none());
    }

    #[test]
    fn test_no_character_literals() {
        assert!(LanguageConfig::javascript().character_pattern.is_none());
    }
}
