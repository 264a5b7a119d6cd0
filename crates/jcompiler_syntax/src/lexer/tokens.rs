//! Token types for the lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for structural symbols
//!
//! ## Notes
//! - `TokenKind` carries no payload, so it is `Copy` and cheap to compare. The raw lexeme and any literal value live
//!   on [`Token`].
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use jcompiler_core::lang::keywords::{self, KeywordId};
use jcompiler_core::lang::operators::{self, OperatorId};
use jcompiler_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Identifier,
    Number,
    StringLiteral,

    // ========== Special ==========
    /// A character (or unterminated string) no lexical rule accepts.
    Illegal,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::Illegal => write!(f, "illegal token"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its kind, raw text, optional literal value and source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token (string literals include their quotes). Empty for `Eof`.
    pub text: String,
    /// Literal payload: the digits of a `Number`, the unescaped contents of a `StringLiteral`.
    pub literal: Option<String>,
    /// 1-based source line the token starts on.
    pub line: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, literal: Option<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            literal,
            line,
            span,
        }
    }

    /// Construct the end-of-input marker.
    pub fn eof(line: usize, pos: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), None, line, Span::new(pos, pos))
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
