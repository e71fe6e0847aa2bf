//! glint-lex - Tokenizer Engine for the Glint Highlighting Engine
//!
//! This crate turns document text into a classified token stream under a
//! lexical rule set from `glint-lang`. It is the core of the live-typing
//! loop: a pure, CPU-bound transform that a caller can run over a whole
//! document or any sub-range, carrying comment-nesting depth across
//! range boundaries so incremental re-scans resume correctly.
//!
//! # Example Usage
//!
//! ```
//! use glint_lang::LanguageConfig;
//! use glint_lex::{tokenize, TokenKind};
//!
//! let config = LanguageConfig::javascript();
//! let text = "const answer = 42;";
//! let result = tokenize(&config, text, 0..text.len(), 0);
//!
//! let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
//! assert!(kinds.contains(&TokenKind::ReservedIdentifier));
//! assert!(kinds.contains(&TokenKind::Number));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions ([`Token`], [`TokenKind`])
//! - [`cursor`] - Range-bounded cursor for document traversal
//! - [`tokenizer`] - The scanning engine ([`tokenize`])
//! - [`classifier`] - Reserved-word/operator resolution
//!
//! # Guarantees
//!
//! - Tokens are contiguous, non-overlapping, and exactly cover the
//!   scanned range; whitespace and unrecognized runs are tokens too.
//! - The scan never fails on user text: unterminated strings and
//!   comments produce tokens reaching the end of the range.
//! - Re-tokenizing an unchanged range with the same initial depth yields
//!   an identical result.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classifier;
pub mod cursor;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, TokenizedRange};
