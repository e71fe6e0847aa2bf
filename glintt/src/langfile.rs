//! Language definition files.
//!
//! This module loads TOML language definitions and lowers them onto
//! [`LanguageOptions`]. A definition file contains only named,
//! enumerated options - quote styles, comment markers, character sets,
//! operator literals, number features, reserved word lists - which map
//! 1:1 onto the pattern combinators; no regex syntax is parsed.
//!
//! # Example definition
//!
//! ```toml
//! name = "Toy"
//! supports_square_brackets = true
//! single_line_comment = "#"
//! reserved_identifiers = ["if", "else"]
//! reserved_operators = ["=", "->"]
//!
//! [[strings]]
//! quote = "\""
//! escape = "\\"
//!
//! [operator]
//! head_chars = "+-*/=<>"
//! continue_chars = "="
//! literals = ["->"]
//! ```

use serde::Deserialize;
use std::path::Path;

use glint_lang::pattern::{CharClass, Pattern};
use glint_lang::quoting::{QuoteStyle, StringPattern};
use glint_lang::LanguageOptions;

use crate::error::{GlinttError, Result};

/// One quoting convention in a definition file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuoteDef {
    /// Opening/closing quote character.
    pub quote: char,
    /// Escape character.
    #[serde(default = "default_escape")]
    pub escape: char,
}

/// Identifier options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IdentifierDef {
    /// Extra characters allowed to start an identifier, each as an
    /// alternate to the standard alphabetic head.
    #[serde(default = "default_extra_heads")]
    pub extra_heads: Vec<char>,
}

impl Default for IdentifierDef {
    fn default() -> Self {
        Self {
            extra_heads: vec!['_'],
        }
    }
}

/// Operator options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OperatorDef {
    /// Characters that can start a general operator run.
    #[serde(default)]
    pub head_chars: String,
    /// Characters that can continue a general operator run.
    #[serde(default)]
    pub continue_chars: String,
    /// Multi-character operators not expressible as a run.
    #[serde(default)]
    pub literals: Vec<String>,
}

/// Number literal options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NumberDef {
    /// Recognize `0b`/`0o`/`0x` radix prefixes.
    #[serde(default = "default_true")]
    pub radix_prefixes: bool,
    /// Digit-group separator character, e.g. `_`.
    #[serde(default)]
    pub separator: Option<char>,
    /// Recognize a fractional part (`1.5`).
    #[serde(default = "default_true")]
    pub decimal_point: bool,
    /// Recognize an exponent part (`1e9`).
    #[serde(default = "default_true")]
    pub exponent: bool,
    /// Literal-kind suffixes (e.g. `n` for BigInt).
    #[serde(default)]
    pub suffixes: Vec<String>,
    /// Permit a leading `-` as part of the literal.
    #[serde(default)]
    pub negation: bool,
}

impl Default for NumberDef {
    fn default() -> Self {
        Self {
            radix_prefixes: true,
            separator: None,
            decimal_point: true,
            exponent: true,
            suffixes: Vec::new(),
            negation: false,
        }
    }
}

/// A complete TOML language definition.
///
/// Every field not present falls back to a sensible default; the result
/// is still validated by `LanguageConfig::new` at registration time.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LanguageFile {
    /// Language name; the registry key.
    pub name: String,

    /// Whether square brackets are bracket tokens.
    #[serde(default)]
    pub supports_square_brackets: bool,

    /// Whether curly brackets are bracket tokens.
    #[serde(default)]
    pub supports_curly_brackets: bool,

    /// String quoting conventions, in priority order.
    #[serde(default)]
    pub strings: Vec<QuoteDef>,

    /// Character literal convention.
    #[serde(default)]
    pub character: Option<QuoteDef>,

    /// Single-line comment marker.
    #[serde(default)]
    pub single_line_comment: Option<String>,

    /// Nested comment open delimiter.
    #[serde(default)]
    pub nested_comment_open: Option<String>,

    /// Nested comment close delimiter.
    #[serde(default)]
    pub nested_comment_close: Option<String>,

    /// Identifier options.
    #[serde(default)]
    pub identifier: IdentifierDef,

    /// Operator options.
    #[serde(default)]
    pub operator: OperatorDef,

    /// Number options.
    #[serde(default)]
    pub number: NumberDef,

    /// Reserved identifiers (keywords).
    #[serde(default)]
    pub reserved_identifiers: Vec<String>,

    /// Reserved operators.
    #[serde(default)]
    pub reserved_operators: Vec<String>,
}

fn default_escape() -> char {
    '\\'
}

fn default_extra_heads() -> Vec<char> {
    vec!['_']
}

fn default_true() -> bool {
    true
}

impl LanguageFile {
    /// Parse a definition from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a definition from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GlinttError::FileOperation(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
    }

    /// Lower the definition onto engine-level language options.
    pub fn to_options(&self) -> LanguageOptions {
        let nested_comment = match (&self.nested_comment_open, &self.nested_comment_close) {
            (Some(open), Some(close)) => Some((open.clone(), close.clone())),
            _ => None,
        };

        LanguageOptions {
            name: self.name.clone(),
            supports_square_brackets: self.supports_square_brackets,
            supports_curly_brackets: self.supports_curly_brackets,
            string_pattern: StringPattern::new(
                self.strings
                    .iter()
                    .map(|s| QuoteStyle::new(s.quote, s.escape))
                    .collect(),
            ),
            character_pattern: self
                .character
                .as_ref()
                .map(|c| QuoteStyle::new(c.quote, c.escape)),
            number_pattern: self.number_pattern(),
            single_line_comment: self.single_line_comment.clone(),
            nested_comment,
            identifier_pattern: self.identifier_pattern(),
            operator_pattern: self.operator_pattern(),
            reserved_identifiers: self.reserved_identifiers.clone(),
            reserved_operators: self.reserved_operators.clone(),
            language_service: None,
        }
    }

    fn identifier_pattern(&self) -> Pattern {
        let mut continue_set: String = self.identifier.extra_heads.iter().collect();
        if continue_set.is_empty() {
            continue_set.push('_');
        }
        let continuation = Pattern::repeat(Pattern::class(CharClass::Union(vec![
            CharClass::Alphanumeric,
            CharClass::OneOf(continue_set),
        ])));

        let mut alternatives = vec![Pattern::seq(vec![
            Pattern::class(CharClass::Alphabetic),
            continuation.clone(),
        ])];
        for head in &self.identifier.extra_heads {
            alternatives.push(Pattern::seq(vec![
                Pattern::literal(head.to_string()),
                continuation.clone(),
            ]));
        }
        Pattern::choice(alternatives)
    }

    fn operator_pattern(&self) -> Pattern {
        let mut alternatives = Vec::new();
        if !self.operator.head_chars.is_empty() {
            let head = Pattern::class(CharClass::OneOf(self.operator.head_chars.clone()));
            if self.operator.continue_chars.is_empty() {
                alternatives.push(head);
            } else {
                alternatives.push(Pattern::seq(vec![
                    head,
                    Pattern::repeat(Pattern::class(CharClass::OneOf(
                        self.operator.continue_chars.clone(),
                    ))),
                ]));
            }
        }
        for literal in &self.operator.literals {
            alternatives.push(Pattern::literal(literal.clone()));
        }
        Pattern::choice(alternatives)
    }

    fn number_pattern(&self) -> Pattern {
        let digits = self.digits(CharClass::AsciiDigit);

        let mut alternatives = Vec::new();
        if self.number.radix_prefixes {
            alternatives.push(self.radix("bB", CharClass::OneOf("01".to_string())));
            alternatives.push(self.radix("oO", CharClass::OneOf("01234567".to_string())));
            alternatives.push(self.radix("xX", CharClass::AsciiHexDigit));
        }

        let exponent = Pattern::seq(vec![
            Pattern::class(CharClass::OneOf("eE".to_string())),
            Pattern::optional(Pattern::class(CharClass::OneOf("+-".to_string()))),
            digits.clone(),
        ]);

        if self.number.decimal_point {
            let mut fraction = vec![digits.clone(), Pattern::literal("."), digits.clone()];
            if self.number.exponent {
                fraction.push(Pattern::optional(exponent.clone()));
            }
            alternatives.push(Pattern::seq(fraction));
        }

        if self.number.exponent {
            alternatives.push(Pattern::seq(vec![
                digits.clone(),
                Pattern::optional(exponent),
            ]));
        } else {
            alternatives.push(digits.clone());
        }

        for suffix in &self.number.suffixes {
            alternatives.push(Pattern::seq(vec![
                digits.clone(),
                Pattern::literal(suffix.clone()),
            ]));
        }

        let choice = Pattern::choice(alternatives);
        if self.number.negation {
            Pattern::seq(vec![
                Pattern::optional(Pattern::literal("-")),
                choice,
            ])
        } else {
            choice
        }
    }

    fn digits(&self, class: CharClass) -> Pattern {
        let digit_class = match self.number.separator {
            Some(sep) => CharClass::Union(vec![class.clone(), CharClass::OneOf(sep.to_string())]),
            None => class.clone(),
        };
        Pattern::seq(vec![
            Pattern::class(class),
            Pattern::repeat(Pattern::class(digit_class)),
        ])
    }

    fn radix(&self, prefix_chars: &str, digit_class: CharClass) -> Pattern {
        let body = match self.number.separator {
            Some(sep) => CharClass::Union(vec![
                digit_class,
                CharClass::OneOf(sep.to_string()),
            ]),
            None => digit_class,
        };
        Pattern::seq(vec![
            Pattern::literal("0"),
            Pattern::class(CharClass::OneOf(prefix_chars.to_string())),
            Pattern::repeat1(Pattern::class(body)),
        ])
    }
}
