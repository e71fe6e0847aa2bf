//! The tokenizer engine.
//!
//! [`tokenize`] consumes a lexical rule set and a byte range of document
//! text and produces an ordered, gap-free sequence of classified tokens
//! plus the comment-nesting depth at the end of the range. The engine is
//! a pure text-to-token transform: it performs no I/O, never mutates the
//! rule set, and never fails on user text - unrecognized input falls
//! through to the catch-all rule and unterminated strings or comments
//! simply produce tokens that reach the end of the range.
//!
//! Pattern classes are tried in a fixed priority order at each position:
//! nested-comment open, single-line comment, string, character, number,
//! identifier, operator, bracket singles, then the whitespace/
//! unrecognized catch-all. The first class to match wins; within a
//! class, the longest match wins (ordered-choice patterns implement
//! that policy themselves).

use std::ops::Range;

use glint_lang::LanguageConfig;
use tracing::{debug, trace};

use crate::classifier::classify;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// The result of tokenizing a range: the classified tokens and the
/// comment-nesting depth in effect at the end of the range.
///
/// A nonzero `final_depth` means the range ended inside an unterminated
/// nested comment; an incremental re-scan of the following region must
/// pass it back in as `initial_depth`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizedRange {
    /// Tokens in strictly increasing offset order, exactly covering the
    /// scanned range with no gaps or overlaps.
    pub tokens: Vec<Token>,
    /// Comment-nesting depth at the end of the range.
    pub final_depth: u32,
}

/// Tokenize `range` of `text` under the given rule set.
///
/// `initial_depth` is the comment-nesting depth carried over from the
/// text before `range` (0 for whole-document scans). Offsets in the
/// returned tokens are absolute document offsets.
///
/// # Example
///
/// ```
/// use glint_lang::LanguageConfig;
/// use glint_lex::tokenizer::tokenize;
/// use glint_lex::token::TokenKind;
///
/// let config = LanguageConfig::javascript();
/// let text = "let x;";
/// let result = tokenize(&config, text, 0..text.len(), 0);
///
/// assert_eq!(result.tokens[0].kind, TokenKind::ReservedIdentifier);
/// assert_eq!(result.final_depth, 0);
/// ```
pub fn tokenize(
    config: &LanguageConfig,
    text: &str,
    range: Range<usize>,
    initial_depth: u32,
) -> TokenizedRange {
    let mut cursor = Cursor::new(text, range.clone());
    let window = cursor.bounded_text();
    let mut tokens = Vec::new();
    let mut depth = initial_depth;

    trace!(
        language = %config.name,
        start = range.start,
        end = range.end,
        depth = initial_depth,
        "tokenize range"
    );

    if depth > 0 {
        match &config.nested_comment {
            Some((open, close)) => {
                // Resuming inside an open comment: only the nesting
                // delimiters are significant until depth returns to zero.
                let start = cursor.position();
                scan_comment_body(&mut cursor, open, close, &mut depth);
                if cursor.position() > start {
                    tokens.push(Token::new(start, cursor.position(), TokenKind::BlockComment));
                }
            }
            None => {
                debug!(depth, "nonzero comment depth for a language without nested comments");
                depth = 0;
            }
        }
    }

    while !cursor.is_at_end() {
        let start = cursor.position();
        let kind = next_token(config, &mut cursor, window, &mut depth);
        debug_assert!(cursor.position() > start);
        let token = Token::new(start, cursor.position(), kind);
        tokens.push(classify(config, window, token));
    }

    TokenizedRange {
        tokens,
        final_depth: depth,
    }
}

/// Scan one token starting at the cursor, returning its provisional kind.
///
/// Advances the cursor by at least one character.
fn next_token(
    config: &LanguageConfig,
    cursor: &mut Cursor<'_>,
    window: &str,
    depth: &mut u32,
) -> TokenKind {
    let start = cursor.position();

    // Nested comment open: a comment subsumes everything until closed.
    if let Some((open, close)) = &config.nested_comment {
        if cursor.starts_with(open) {
            cursor.advance_bytes(open.len());
            *depth += 1;
            scan_comment_body(cursor, open, close, depth);
            return TokenKind::BlockComment;
        }
    }

    // Single-line comment: consumes to the end of the line.
    if let Some(marker) = &config.single_line_comment {
        if cursor.starts_with(marker) {
            cursor.advance_bytes(marker.len());
            while !cursor.is_at_end() && cursor.current_char() != '\n' {
                cursor.advance();
            }
            return TokenKind::LineComment;
        }
    }

    // String literal; unterminated at end of range is still a string.
    if let Some(m) = config.string_pattern.match_at(window, start) {
        if !m.terminated {
            debug!(offset = start, "unterminated string literal at end of range");
        }
        cursor.advance_to(m.end);
        return TokenKind::String;
    }

    // Character literal, for languages that have them.
    if let Some(style) = &config.character_pattern {
        if let Some(m) = style.match_at(window, start) {
            cursor.advance_to(m.end);
            return TokenKind::Character;
        }
    }

    // Number literal.
    if let Some(end) = config.number_pattern.match_at(window, start) {
        if end > start {
            cursor.advance_to(end);
            return TokenKind::Number;
        }
    }

    // Identifier shape; reserved-word resolution happens in the classifier.
    if let Some(end) = config.identifier_pattern.match_at(window, start) {
        if end > start {
            cursor.advance_to(end);
            return TokenKind::Identifier;
        }
    }

    // Operator shape; reserved-operator resolution happens in the classifier.
    if let Some(end) = config.operator_pattern.match_at(window, start) {
        if end > start {
            cursor.advance_to(end);
            return TokenKind::Operator;
        }
    }

    // Bracket single characters.
    if let Some(kind) = bracket_kind(config, cursor.current_char()) {
        cursor.advance();
        return kind;
    }

    // Whitespace/unrecognized catch-all: a maximal whitespace run, or a
    // single unrecognized character. Always advances.
    if cursor.current_char().is_whitespace() {
        while !cursor.is_at_end() && cursor.current_char().is_whitespace() {
            cursor.advance();
        }
    } else {
        cursor.advance();
    }
    TokenKind::Plain
}

/// Consume comment text until the nesting depth returns to zero or the
/// range ends. Tracks further nested opens along the way.
fn scan_comment_body(cursor: &mut Cursor<'_>, open: &str, close: &str, depth: &mut u32) {
    while *depth > 0 && !cursor.is_at_end() {
        if cursor.starts_with(open) {
            cursor.advance_bytes(open.len());
            *depth += 1;
        } else if cursor.starts_with(close) {
            cursor.advance_bytes(close.len());
            *depth -= 1;
        } else {
            cursor.advance();
        }
    }
    if *depth > 0 {
        debug!(depth = *depth, "range ends inside nested comment");
    }
}

/// Map a bracket character to its token kind, honoring the rule set's
/// bracket-support flags. Round brackets are always recognized.
fn bracket_kind(config: &LanguageConfig, c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '[' if config.supports_square_brackets => Some(TokenKind::LBracket),
        ']' if config.supports_square_brackets => Some(TokenKind::RBracket),
        '{' if config.supports_curly_brackets => Some(TokenKind::LBrace),
        '}' if config.supports_curly_brackets => Some(TokenKind::RBrace),
        _ => None,
    }
}
