//! Number scanning.
//!
//! Handles integer and decimal literals. The literal payload is the numeric text exactly as written.

use super::Lexer;
use super::tokens::TokenKind;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize) {
        self.consume_digits();

        // Decimal part: `12.` leaves the dot for member access.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            self.consume_digits();
        }

        let value = self.lexeme(start).to_string();
        self.add_token(TokenKind::Number, start, Some(value));
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, scan};
    use jcompiler_core::lang::punctuation::PunctuationId;

    #[test]
    fn test_decimal_literal() {
        let tokens = scan("12.5");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].literal.as_deref(), Some("12.5"));
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_number() {
        let tokens = scan("12.");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].literal.as_deref(), Some("12"));
        assert_eq!(tokens[1].kind, TokenKind::Punctuation(PunctuationId::Dot));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_number_followed_by_identifier() {
        let tokens = scan("3x");
        assert_eq!(tokens[0].literal.as_deref(), Some("3"));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_only_one_fraction() {
        let tokens = scan("1.2.3");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Punctuation(PunctuationId::Dot), TokenKind::Number, TokenKind::Eof]
        );
        assert_eq!(tokens[0].text, "1.2");
    }
}
