//! Lexer for the Java subset.
//!
//! Handles tokenization including:
//! - Keywords (class, public, int, while, etc.) resolved through the `jcompiler_core` registry
//! - Identifiers, numeric literals and string literals (with escape sequences)
//! - One- and two-character operators and punctuation
//! - Line and block comments
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning
//! - `numbers` - Numeric literal scanning
//! - `comments` - `//` and `/* */` comments, and the `/` operators
//!
//! ## Notes
//! - The lexer never fails. Problems become [`SyntaxError`]s in [`Lexed::errors`], and offending characters become
//!   `Illegal` tokens so the parser can keep positions aligned with the source.

mod comments;
mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use jcompiler_core::lang::operators::OperatorId;
use jcompiler_core::lang::punctuation::{self, PunctuationId};

/// Lexer for Java-subset source code.
///
/// Converts source text into a stream of tokens, tracking the 1-based line of every token.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
}

/// Result of lexing one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// Always ends with exactly one `Eof` token.
    pub tokens: Vec<Token>,
    pub errors: Vec<SyntaxError>,
}

impl Lexed {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `Eof` token, even when errors were recorded.
    pub fn tokenize(mut self) -> Lexed {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line, self.current_pos));

        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "lexed source"
        );

        Lexed {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn lexeme(&self, start: usize) -> &'a str {
        &self.source[start..self.current_pos]
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Whitespace
            ' ' | '\t' | '\r' | '\x0C' => {}
            '\n' => self.line += 1,

            // Operators
            '=' => self.operator(start, OperatorId::Assign, &[('=', OperatorId::EqEq)]),
            '<' => self.operator(start, OperatorId::Lt, &[('=', OperatorId::LtEq)]),
            '>' => self.operator(start, OperatorId::Gt, &[('=', OperatorId::GtEq)]),
            '+' => self.operator(
                start,
                OperatorId::Plus,
                &[('+', OperatorId::PlusPlus), ('=', OperatorId::PlusEq)],
            ),
            '-' => self.operator(
                start,
                OperatorId::Minus,
                &[('-', OperatorId::MinusMinus), ('=', OperatorId::MinusEq)],
            ),
            '*' => self.operator(start, OperatorId::Star, &[('=', OperatorId::StarEq)]),
            '%' => self.operator(start, OperatorId::Percent, &[('=', OperatorId::PercentEq)]),
            '/' => self.scan_slash(start),

            // Operators with no single-character form
            '!' => self.pair_only(start, c, '=', OperatorId::NotEq),
            '&' => self.pair_only(start, c, '&', OperatorId::AndAnd),
            '|' => self.pair_only(start, c, '|', OperatorId::OrOr),

            // Strings
            '"' => self.scan_string(start),

            // Numbers
            '0'..='9' => self.scan_number(start),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => match punctuation::from_char(c) {
                Some(id) => self.add_punct(id, start),
                None => self.illegal_character(start, c),
            },
        }
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize, literal: Option<String>) {
        let text = self.lexeme(start);
        self.tokens.push(Token::new(
            kind,
            text,
            literal,
            self.line,
            Span::new(start, self.current_pos),
        ));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start, None);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start, None);
    }

    /// Try to match compound operator, fallback to simple.
    fn operator(&mut self, start: usize, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id, start);
                return;
            }
        }
        self.add_op(simple, start);
    }

    /// Operators like `!=` and `&&` whose first character is illegal on its own.
    fn pair_only(&mut self, start: usize, first: char, second: char, id: OperatorId) {
        if self.match_char(second) {
            self.add_op(id, start);
        } else {
            self.illegal_character(start, first);
        }
    }

    fn illegal_character(&mut self, start: usize, ch: char) {
        let span = Span::new(start, self.current_pos);
        self.errors.push(SyntaxError::IllegalCharacter {
            ch,
            line: self.line,
            span,
        });
        self.add_token(TokenKind::Illegal, start, None);
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        // Exact lookup after the whole run is consumed, so `classroom` stays one identifier.
        match keyword_id(self.lexeme(start)) {
            Some(id) => self.add_token(TokenKind::Keyword(id), start, None),
            None => self.add_token(TokenKind::Identifier, start, None),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Lex a source string into tokens and lexical errors.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Lexed {
    Lexer::new(source).tokenize()
}

/// Lex a source string and keep only the tokens.
pub fn scan(source: &str) -> Vec<Token> {
    lex(source).tokens
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use jcompiler_core::lang::keywords::{self, KeywordId};
    use jcompiler_core::lang::operators;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let lexed = lex(k.canonical);
            assert!(!lexed.has_errors(), "lex({:?}) failed: {:?}", k.canonical, lexed.errors);
            assert_eq!(lexed.tokens.len(), 2, "expected token + EOF for keyword {:?}", k.id);
            assert!(lexed.tokens[0].kind.is_keyword(k.id));
            assert_eq!(lexed.tokens[1].kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let lexed = lex(o.spelling);
            assert!(!lexed.has_errors(), "lex({:?}) failed: {:?}", o.spelling, lexed.errors);
            assert_eq!(lexed.tokens.len(), 2, "expected token + EOF for operator {:?}", o.id);
            assert!(lexed.tokens[0].kind.is_operator(o.id));
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let tokens = scan(p.canonical);
            assert_eq!(tokens.len(), 2);
            assert!(tokens[0].kind.is_punctuation(p.id));
        }
    }

    #[test]
    fn test_maximal_munch_identifier() {
        let tokens = scan("classroom");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "classroom");

        let tokens = scan("$tmp _x1 class");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Keyword(KeywordId::Class));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(kinds("Class"), vec![TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let tokens = scan("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].text, "");
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(
            kinds("a<=b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(OperatorId::LtEq),
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("i++ += == = !="),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(OperatorId::PlusPlus),
                TokenKind::Operator(OperatorId::PlusEq),
                TokenKind::Operator(OperatorId::EqEq),
                TokenKind::Operator(OperatorId::Assign),
                TokenKind::Operator(OperatorId::NotEq),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("&& ||"),
            vec![
                TokenKind::Operator(OperatorId::AndAnd),
                TokenKind::Operator(OperatorId::OrOr),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lone_bang_ampersand_pipe_are_illegal() {
        let lexed = lex("! & |");
        let illegal: Vec<_> = lexed.tokens.iter().filter(|t| t.kind == TokenKind::Illegal).collect();
        assert_eq!(illegal.len(), 3);
        assert_eq!(lexed.errors.len(), 3);
        assert!(matches!(lexed.errors[0], SyntaxError::IllegalCharacter { ch: '!', .. }));
    }

    #[test]
    fn test_illegal_character_keeps_scanning() {
        let lexed = lex("int # x");
        assert_eq!(
            lexed.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Keyword(KeywordId::Int),
                TokenKind::Illegal,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(lexed.tokens[1].text, "#");
        assert_eq!(lexed.errors[0].report(), "[line 1] Error : Unexpected character '#'.");
    }

    #[test]
    fn test_line_numbers() {
        let tokens = scan("a\nb\r\n\n c");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 4);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
        assert_eq!(tokens[3].line, 4);
    }

    #[test]
    fn test_spans_cover_lexemes() {
        let source = "int  count = 42;";
        for token in scan(source) {
            assert_eq!(&source[token.span.start..token.span.end], token.text);
        }
    }

    #[test]
    fn test_non_ascii_is_illegal() {
        let lexed = lex("é");
        assert_eq!(lexed.tokens[0].kind, TokenKind::Illegal);
        assert_eq!(lexed.tokens[0].text, "é");
        assert!(matches!(lexed.errors[0], SyntaxError::IllegalCharacter { ch: 'é', .. }));
    }
}
