//! Diagnostics for the lexer and parser.
//!
//! Every problem the frontend can report is a [`SyntaxError`] variant. Errors are values: the lexer and parser
//! collect them and keep going, and the caller decides how to render them.
//!
//! ## Rendering
//! - [`SyntaxError::report`] produces the fixed one-line format `[line <L>] Error <where>: <message>`, where
//!   `<where>` is empty for lexical errors, `at end` at end of input, and `at '<lexeme>'` otherwise.
//! - Each variant also implements [`miette::Diagnostic`] (code, help, labelled span), so callers can render a
//!   source snippet with `miette::Report`.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::{Modifier, Span};
use crate::lexer::TokenKind;

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// What a production required when it met an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific keyword, operator or punctuation token.
    Token(TokenKind),
    Identifier,
    Type,
    Expression,
    Statement,
    Member,
    CatchOrFinally,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Identifier => write!(f, "identifier"),
            Expected::Type => write!(f, "type"),
            Expected::Expression => write!(f, "expression"),
            Expected::Statement => write!(f, "statement"),
            Expected::Member => write!(f, "field or method declaration"),
            Expected::CatchOrFinally => write!(f, "'catch' or 'finally'"),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A lexical or syntactic error with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    // ========== Lexical ==========
    #[error("Unterminated string.")]
    #[diagnostic(
        code(jcompiler::lex::unterminated_string),
        help("string literals must be closed with `\"` on the line they start")
    )]
    UnterminatedString {
        line: usize,
        #[label("string starts here")]
        span: Span,
    },

    #[error("Unterminated block comment.")]
    #[diagnostic(code(jcompiler::lex::unterminated_comment), help("close the comment with `*/`"))]
    UnterminatedComment {
        line: usize,
        #[label("comment starts here")]
        span: Span,
    },

    #[error("Unexpected character '{ch}'.")]
    #[diagnostic(code(jcompiler::lex::illegal_character))]
    IllegalCharacter {
        ch: char,
        line: usize,
        #[label("not valid here")]
        span: Span,
    },

    // ========== Syntactic ==========
    #[error("{message}")]
    #[diagnostic(code(jcompiler::parse::unexpected_token))]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        lexeme: String,
        message: String,
        line: usize,
        #[label("expected {expected}, found {found}")]
        span: Span,
    },

    #[error("Expect class declaration.")]
    #[diagnostic(
        code(jcompiler::parse::missing_class),
        help("a compilation unit must declare exactly one class")
    )]
    MissingClassDeclaration {
        found: TokenKind,
        lexeme: String,
        line: usize,
        #[label("no class declaration from here on")]
        span: Span,
    },

    #[error("Repeated modifier '{modifier}'.")]
    #[diagnostic(code(jcompiler::parse::repeated_modifier))]
    RepeatedModifier {
        modifier: Modifier,
        line: usize,
        #[label("already specified")]
        span: Span,
    },

    #[error("Nesting too deep.")]
    #[diagnostic(
        code(jcompiler::parse::nesting_too_deep),
        help("split deeply nested blocks or expressions into smaller pieces")
    )]
    NestingTooDeep {
        found: TokenKind,
        lexeme: String,
        line: usize,
        #[label("nesting limit reached here")]
        span: Span,
    },
}

impl SyntaxError {
    /// 1-based line the error is reported on.
    pub fn line(&self) -> usize {
        match self {
            SyntaxError::UnterminatedString { line, .. }
            | SyntaxError::UnterminatedComment { line, .. }
            | SyntaxError::IllegalCharacter { line, .. }
            | SyntaxError::UnexpectedToken { line, .. }
            | SyntaxError::MissingClassDeclaration { line, .. }
            | SyntaxError::RepeatedModifier { line, .. }
            | SyntaxError::NestingTooDeep { line, .. } => *line,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnterminatedString { span, .. }
            | SyntaxError::UnterminatedComment { span, .. }
            | SyntaxError::IllegalCharacter { span, .. }
            | SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::MissingClassDeclaration { span, .. }
            | SyntaxError::RepeatedModifier { span, .. }
            | SyntaxError::NestingTooDeep { span, .. } => *span,
        }
    }

    /// Return `true` for errors raised by the lexer.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            SyntaxError::UnterminatedString { .. }
                | SyntaxError::UnterminatedComment { .. }
                | SyntaxError::IllegalCharacter { .. }
        )
    }

    /// The `<where>` part of the one-line report.
    pub fn location(&self) -> String {
        match self {
            SyntaxError::UnterminatedString { .. }
            | SyntaxError::UnterminatedComment { .. }
            | SyntaxError::IllegalCharacter { .. } => String::new(),
            SyntaxError::UnexpectedToken { found, lexeme, .. }
            | SyntaxError::MissingClassDeclaration { found, lexeme, .. }
            | SyntaxError::NestingTooDeep { found, lexeme, .. } => at_token(*found, lexeme),
            SyntaxError::RepeatedModifier { modifier, .. } => format!("at '{}'", modifier),
        }
    }

    /// Render the fixed one-line report, e.g. `[line 3] Error at ';': Expect expression.`
    pub fn report(&self) -> String {
        format!("[line {}] Error {}: {}", self.line(), self.location(), self)
    }
}

fn at_token(found: TokenKind, lexeme: &str) -> String {
    match found {
        TokenKind::Eof => "at end".to_string(),
        _ => format!("at '{}'", lexeme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcompiler_core::lang::punctuation::PunctuationId;

    #[test]
    fn test_lexical_report_has_empty_location() {
        let err = SyntaxError::IllegalCharacter {
            ch: '#',
            line: 4,
            span: Span::new(10, 11),
        };
        insta::assert_snapshot!(err.report(), @"[line 4] Error : Unexpected character '#'.");
        assert!(err.is_lexical());
    }

    #[test]
    fn test_unexpected_token_report() {
        let err = SyntaxError::UnexpectedToken {
            expected: Expected::Token(TokenKind::Punctuation(PunctuationId::Semicolon)),
            found: TokenKind::Punctuation(PunctuationId::RBrace),
            lexeme: "}".to_string(),
            message: "Expect ';' after field declaration.".to_string(),
            line: 2,
            span: Span::new(20, 21),
        };
        insta::assert_snapshot!(err.report(), @"[line 2] Error at '}': Expect ';' after field declaration.");
        assert!(!err.is_lexical());
    }

    #[test]
    fn test_report_at_end() {
        let err = SyntaxError::MissingClassDeclaration {
            found: TokenKind::Eof,
            lexeme: String::new(),
            line: 1,
            span: Span::new(0, 0),
        };
        assert_eq!(err.report(), "[line 1] Error at end: Expect class declaration.");
    }

    #[test]
    fn test_expected_display() {
        assert_eq!(
            Expected::Token(TokenKind::Punctuation(PunctuationId::LBrace)).to_string(),
            "'{'"
        );
        assert_eq!(Expected::CatchOrFinally.to_string(), "'catch' or 'finally'");
    }

    #[test]
    fn test_span_converts_to_source_span() {
        let span: SourceSpan = Span::new(5, 9).into();
        assert_eq!(span.offset(), 5);
        assert_eq!(span.len(), 4);
    }
}
