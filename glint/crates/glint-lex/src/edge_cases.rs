//! Edge case tests for glint-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token, TokenKind};
    use glint_lang::LanguageConfig;

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(&LanguageConfig::javascript(), source, 0..source.len(), 0).tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        let tokens = lex_all("   \t\n  ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Plain);
        assert_eq!(tokens[0].range(), 0..7);
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].range(), 0..1);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].len as usize, 10_000);
    }

    #[test]
    fn test_edge_deeply_nested_comment() {
        let mut source = String::new();
        for _ in 0..50 {
            source.push_str("/* ");
        }
        for _ in 0..50 {
            source.push_str("*/ ");
        }
        let result = tokenize(
            &LanguageConfig::javascript(),
            &source,
            0..source.len(),
            0,
        );
        assert_eq!(result.final_depth, 0);
    }

    #[test]
    fn test_edge_comment_open_at_last_byte() {
        // Range ends right after the open delimiter.
        let source = "x /*";
        let result = tokenize(
            &LanguageConfig::javascript(),
            source,
            0..source.len(),
            0,
        );
        assert_eq!(result.final_depth, 1);
        let last = result.tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::BlockComment);
        assert_eq!(last.range(), 2..4);
    }

    #[test]
    fn test_edge_lone_quote() {
        let t = lex_all("\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::String);
    }

    #[test]
    fn test_edge_string_ending_in_escape() {
        let t = lex_all("\"abc\\");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::String);
        assert_eq!(t[0].range(), 0..5);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let source = "\"a\"\"b\"";
        let t = lex_all(source);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].text(source), "\"a\"");
        assert_eq!(t[1].text(source), "\"b\"");
    }

    #[test]
    fn test_edge_number_then_identifier() {
        let source = "1_000x";
        let t = lex_all(source);
        assert_eq!(t[0].kind, TokenKind::Number);
        assert_eq!(t[0].text(source), "1_000");
        assert_eq!(t[1].kind, TokenKind::Identifier);
        assert_eq!(t[1].text(source), "x");
    }

    #[test]
    fn test_edge_dollar_and_underscore_idents() {
        let source = "$ _ $$ __ $a _0";
        let idents = lex_all(source)
            .into_iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .count();
        assert_eq!(idents, 6);
    }

    #[test]
    fn test_edge_operator_run_stops_at_whitespace() {
        let source = "a === b";
        let t = lex_all(source);
        let op = t.iter().find(|t| t.kind == TokenKind::ReservedOperator).unwrap();
        assert_eq!(op.text(source), "===");
    }

    #[test]
    fn test_edge_spread_then_dot() {
        let source = "....";
        let t = lex_all(source);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].text(source), "...");
        assert_eq!(t[1].text(source), ".");
    }

    #[test]
    fn test_edge_line_comment_at_eof_without_newline() {
        let source = "x // trailing";
        let t = lex_all(source);
        let last = t.last().unwrap();
        assert_eq!(last.kind, TokenKind::LineComment);
        assert_eq!(last.end(), source.len());
    }

    #[test]
    fn test_edge_crlf_line_comment() {
        // The comment stops at the newline; `\r` is part of the comment
        // text the way a to-end-of-line rule sees it.
        let source = "// a\r\nx";
        let t = lex_all(source);
        assert_eq!(t[0].kind, TokenKind::LineComment);
        assert_eq!(t[0].text(source), "// a\r");
    }

    #[test]
    fn test_edge_multibyte_string_content() {
        let source = "\"héllo wörld\"";
        let t = lex_all(source);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::String);
        assert_eq!(t[0].len as usize, source.len());
    }

    #[test]
    fn test_edge_comment_marker_inside_string() {
        let source = "\"// not a comment\"";
        let t = lex_all(source);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::String);
    }

    #[test]
    fn test_edge_string_delimiter_inside_comment() {
        let source = "/* \" */";
        let result = tokenize(
            &LanguageConfig::javascript(),
            source,
            0..source.len(),
            0,
        );
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(result.final_depth, 0);
    }
}
