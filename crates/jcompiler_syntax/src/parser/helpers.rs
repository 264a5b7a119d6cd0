/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Error construction and recovery (`report`, `recover`, `synchronize`)
/// - The nesting guard (`nested`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the cursor is on the end-of-input marker.
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        match self.tokens.get(self.pos) {
            Some(tok) => *tok,
            None => &self.eof,
        }
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        match self.tokens.get(self.pos + 1) {
            Some(tok) => *tok,
            None => &self.eof,
        }
    }

    /// Return the most recently consumed token.
    fn previous(&self) -> &Token {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(tok) => *tok,
            None => &self.eof,
        }
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, SyntaxError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(Expected::Token(TokenKind::Keyword(id)), msg))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<&Token, SyntaxError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(Expected::Token(TokenKind::Punctuation(id)), msg))
        }
    }

    // ========================================================================
    // Spans
    // ========================================================================

    /// Record where the node about to be parsed begins.
    fn start(&self) -> Start {
        let tok = self.peek();
        Start {
            offset: tok.span.start,
            line: tok.line,
        }
    }

    /// Wrap `node` in a span running from `start` to the end of the last consumed token.
    fn finish<T>(&self, node: T, start: Start) -> Spanned<T> {
        let end = self.previous().span.end.max(start.offset);
        Spanned::new(node, Span::new(start.offset, end), start.line)
    }

    // ========================================================================
    // Errors and recovery
    // ========================================================================

    /// Build an `UnexpectedToken` error pointing at the current token.
    fn error_at_current(&self, expected: Expected, message: &str) -> SyntaxError {
        let tok = self.peek();
        SyntaxError::UnexpectedToken {
            expected,
            found: tok.kind,
            lexeme: tok.text.clone(),
            message: message.to_string(),
            line: tok.line,
            span: tok.span,
        }
    }

    /// Record an error. A second error at the same span as the previous one is dropped.
    fn report(&mut self, err: SyntaxError) {
        if self.errors.last().is_some_and(|last| last.span() == err.span()) {
            tracing::trace!(error = %err, "suppressed cascading error");
            return;
        }
        self.errors.push(err);
    }

    /// Run a production at a recovery point: on error, record it and synchronize.
    ///
    /// The cursor always moves past at least one token on failure, so a recovery loop cannot stall.
    fn recover<T>(&mut self, production: fn(&mut Self) -> Result<T, SyntaxError>, point: SyncPoint) -> Option<T> {
        let from = self.pos;
        match production(self) {
            Ok(node) => Some(node),
            Err(err) => {
                self.report(err);
                self.synchronize(point);
                if self.pos == from {
                    self.advance();
                }
                None
            }
        }
    }

    /// Discard tokens until a synchronization point.
    ///
    /// Stops after a `;` at the current depth, before a `}` that closes the current scope, after the `}` that closes
    /// a block opened during the skip, or at end of input. At the current depth it also stops before any token that
    /// can start the next construct of `point` (see [`SyncPoint`]).
    fn synchronize(&mut self, point: SyncPoint) {
        let from = self.pos;
        let mut depth = 0usize;

        while !self.is_at_end() {
            if depth == 0 && self.at_resume_token(point) {
                break;
            }
            if self.check_punct(PunctuationId::Semicolon) && depth == 0 {
                self.advance();
                break;
            }
            if self.check_punct(PunctuationId::LBrace) {
                depth += 1;
            } else if self.check_punct(PunctuationId::RBrace) {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    break;
                }
            }
            self.advance();
        }

        tracing::trace!(?point, skipped = self.pos - from, resume_at = %self.peek().kind, "synchronized");
    }

    /// Return `true` if the current token can start the next construct at `point`.
    fn at_resume_token(&self, point: SyncPoint) -> bool {
        let kind = self.peek().kind;
        match point {
            SyncPoint::Statement => false,
            SyncPoint::Member => {
                kind.primitive_type().is_some() || kind.modifier().is_some_and(Modifier::is_member_modifier)
            }
            SyncPoint::TopLevel => kind.is_keyword(KeywordId::Import) || self.at_class_start(),
        }
    }

    /// Run `production` one nesting level deeper, failing once [`MAX_NESTING`] is reached.
    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> Result<T, SyntaxError>) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING {
            let tok = self.peek();
            return Err(SyntaxError::NestingTooDeep {
                found: tok.kind,
                lexeme: tok.text.clone(),
                line: tok.line,
                span: tok.span,
            });
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }
}
