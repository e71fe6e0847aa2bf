//! Helpers shared by the glintt subcommands.

use std::path::Path;

use glint_lang::LanguageRegistry;
use glint_lex::TokenKind;
use tracing::debug;

use crate::error::Result;
use crate::langfile::LanguageFile;

/// Build the language registry: built-ins plus an optional definition
/// file. Registration validates the definition and fails loudly here,
/// before any file is tokenized with it.
pub fn load_registry(lang_file: Option<&Path>) -> Result<LanguageRegistry> {
    let registry = LanguageRegistry::with_builtins();
    if let Some(path) = lang_file {
        let file = LanguageFile::load(path)?;
        let config = registry.register(file.to_options())?;
        debug!(language = %config.name, path = %path.display(), "registered language definition");
    }
    Ok(registry)
}

/// Stable user-facing name for a token kind.
pub fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Identifier => "identifier",
        TokenKind::ReservedIdentifier => "reserved-identifier",
        TokenKind::Operator => "operator",
        TokenKind::ReservedOperator => "reserved-operator",
        TokenKind::Number => "number",
        TokenKind::String => "string",
        TokenKind::Character => "character",
        TokenKind::LineComment => "comment-line",
        TokenKind::BlockComment => "comment-block",
        TokenKind::LParen => "round-bracket-open",
        TokenKind::RParen => "round-bracket-close",
        TokenKind::LBracket => "square-bracket-open",
        TokenKind::RBracket => "square-bracket-close",
        TokenKind::LBrace => "curly-bracket-open",
        TokenKind::RBrace => "curly-bracket-close",
        TokenKind::Plain => "plain",
    }
}
