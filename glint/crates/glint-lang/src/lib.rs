//! glint-lang - Lexical Rule Sets for the Glint Highlighting Engine
//!
//! This crate defines the declarative, per-language description of how to
//! recognize tokens: identifier/operator/number patterns built from
//! composable matchers, string/character quoting conventions, comment
//! markers, and reserved-word/operator sets. A rule set is plain data -
//! the tokenizer in `glint-lex` interprets it uniformly, with no
//! language-specific branches in the engine.
//!
//! # Overview
//!
//! A language is described by [`LanguageOptions`], validated once into an
//! immutable [`LanguageConfig`], and shared read-only (via `Arc`) across
//! every tokenization run for documents in that language. Malformed
//! patterns are rejected at construction time; the tokenizer never sees a
//! rule set that failed validation.
//!
//! # Example
//!
//! ```
//! use glint_lang::LanguageConfig;
//!
//! let config = LanguageConfig::javascript();
//! assert_eq!(config.name, "JavaScript");
//! assert!(config.is_reserved_identifier("function"));
//! assert!(!config.is_reserved_identifier("functionX"));
//! ```
//!
//! # Module Structure
//!
//! - [`pattern`] - Composable pattern matchers ([`Pattern`], [`CharClass`])
//! - [`quoting`] - String/character quoting conventions ([`QuoteStyle`])
//! - [`config`] - Language configuration ([`LanguageConfig`], [`ConfigError`])
//! - [`javascript`] - Built-in JavaScript configuration data
//! - [`registry`] - Shared language registry ([`LanguageRegistry`])

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod javascript;
pub mod pattern;
pub mod quoting;
pub mod registry;

// Re-export main types for convenience
pub use config::{ConfigError, LanguageConfig, LanguageOptions, LanguageService};
pub use pattern::{CharClass, Pattern, PatternError};
pub use quoting::{QuoteStyle, StringMatch, StringPattern};
pub use registry::LanguageRegistry;
