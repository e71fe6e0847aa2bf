//! Token classifier - reserved-word and reserved-operator resolution.
//!
//! The tokenizer emits identifier- and operator-shaped tokens with
//! provisional kinds; this module finalizes them against the rule set's
//! reserved sets. Reservation is a membership test on the exact matched
//! text - case-sensitive, whole token only - so a reserved word is always
//! a subset of the shape-valid tokens, never a separate pattern. Every
//! other token kind passes through unchanged.

use glint_lang::LanguageConfig;

use crate::token::{Token, TokenKind};

/// Finalize a provisionally-typed token against the reserved sets.
///
/// `source` must be the text the token was scanned from.
///
/// # Example
///
/// ```
/// use glint_lang::LanguageConfig;
/// use glint_lex::classifier::classify;
/// use glint_lex::token::{Token, TokenKind};
///
/// let config = LanguageConfig::javascript();
/// let source = "function";
/// let token = Token::new(0, 8, TokenKind::Identifier);
/// assert_eq!(classify(&config, source, token).kind, TokenKind::ReservedIdentifier);
/// ```
#[inline]
pub fn classify(config: &LanguageConfig, source: &str, token: Token) -> Token {
    let kind = match token.kind {
        TokenKind::Identifier if config.is_reserved_identifier(token.text(source)) => {
            TokenKind::ReservedIdentifier
        }
        TokenKind::Operator if config.is_reserved_operator(token.text(source)) => {
            TokenKind::ReservedOperator
        }
        kind => kind,
    };
    Token { kind, ..token }
}
