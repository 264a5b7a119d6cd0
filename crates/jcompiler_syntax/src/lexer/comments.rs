//! Comment scanning and the `/` operators.

use super::Lexer;
use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use jcompiler_core::lang::operators::OperatorId;

impl<'a> Lexer<'a> {
    /// Scan `/`, `/=`, `// ...` and `/* ... */`. Called after consuming the first `/`.
    pub(super) fn scan_slash(&mut self, start: usize) {
        if self.match_char('/') {
            self.skip_line_comment();
        } else if self.match_char('*') {
            self.skip_block_comment(start);
        } else if self.match_char('=') {
            self.add_op(OperatorId::SlashEq, start);
        } else {
            self.add_op(OperatorId::Slash, start);
        }
    }

    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skip to the first `*/`. Newlines inside the comment still count.
    fn skip_block_comment(&mut self, start: usize) {
        let open_line = self.line;
        loop {
            match self.advance() {
                None => {
                    self.errors.push(SyntaxError::UnterminatedComment {
                        line: open_line,
                        span: Span::new(start, self.current_pos),
                    });
                    return;
                }
                Some('\n') => self.line += 1,
                Some('*') if self.match_char('/') => return,
                Some(_) => {}
            }
        }
    }
}
