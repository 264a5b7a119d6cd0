//! String literal scanning.
//!
//! Strings are double-quoted and must close on the line they open. Escape sequences are resolved into the token's
//! literal payload; the token text keeps the raw spelling including quotes.

use super::Lexer;
use super::tokens::TokenKind;
use crate::ast::Span;
use crate::diagnostics::SyntaxError;

/// Result of processing an escape sequence
enum EscapeResult {
    /// Successfully parsed escape character
    Char(char),
    /// Unknown escape - preserve as-is (backslash + char)
    Unknown(char),
    /// Backslash directly before a newline or end of input
    Dangling,
}

impl<'a> Lexer<'a> {
    /// Scan a string literal. Called after consuming the opening `"`.
    pub(super) fn scan_string(&mut self, start: usize) {
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    // The newline is left for the main loop so the line count stays right.
                    self.errors.push(SyntaxError::UnterminatedString {
                        line: self.line,
                        span: Span::new(start, self.current_pos),
                    });
                    self.add_token(TokenKind::Illegal, start, None);
                    return;
                }
                Some('"') => {
                    self.advance();
                    self.add_token(TokenKind::StringLiteral, start, Some(value));
                    return;
                }
                Some('\\') => {
                    self.advance();
                    match self.scan_escape() {
                        EscapeResult::Char(c) => value.push(c),
                        EscapeResult::Unknown(c) => {
                            value.push('\\');
                            value.push(c);
                        }
                        EscapeResult::Dangling => value.push('\\'),
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }
    }

    /// Process an escape sequence. Called after consuming the backslash.
    fn scan_escape(&mut self) -> EscapeResult {
        let c = match self.peek() {
            None | Some('\n') => return EscapeResult::Dangling,
            Some(c) => c,
        };
        self.advance();
        match c {
            'n' => EscapeResult::Char('\n'),
            't' => EscapeResult::Char('\t'),
            'r' => EscapeResult::Char('\r'),
            'b' => EscapeResult::Char('\u{8}'),
            'f' => EscapeResult::Char('\u{C}'),
            '0' => EscapeResult::Char('\0'),
            '"' => EscapeResult::Char('"'),
            '\'' => EscapeResult::Char('\''),
            '\\' => EscapeResult::Char('\\'),
            other => EscapeResult::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::SyntaxError;
    use crate::lexer::{TokenKind, lex, scan};

    #[test]
    fn test_simple_string() {
        let tokens = scan(r#""hello world""#);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, r#""hello world""#);
        assert_eq!(tokens[0].literal.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_escapes_are_cooked() {
        let tokens = scan(r#""a\"b\n\\c""#);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].literal.as_deref(), Some("a\"b\n\\c"));
    }

    #[test]
    fn test_unknown_escape_is_kept() {
        let tokens = scan(r#""\q""#);
        assert_eq!(tokens[0].literal.as_deref(), Some("\\q"));
    }

    #[test]
    fn test_unterminated_string_resumes_at_newline() {
        let lexed = lex("\"abc\nint");
        assert_eq!(lexed.tokens[0].kind, TokenKind::Illegal);
        assert_eq!(lexed.tokens[0].text, "\"abc");
        assert_eq!(lexed.tokens[1].text, "int");
        assert_eq!(lexed.tokens[1].line, 2);
        assert_eq!(lexed.errors.len(), 1);
        assert!(matches!(lexed.errors[0], SyntaxError::UnterminatedString { line: 1, .. }));
    }

    #[test]
    fn test_unterminated_string_at_end_of_input() {
        let lexed = lex("x = \"oops\\");
        assert_eq!(lexed.errors.len(), 1);
        assert_eq!(lexed.errors[0].report(), "[line 1] Error : Unterminated string.");
        assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }
}
