/// Expression parsing methods.
///
/// This chunk implements the expression grammar using a precedence ladder:
/// logical (`||`, `&&`) → relational (`==`, `!=`, `<`, `<=`, `>`, `>=`) → additive → multiplicative → unary →
/// postfix (`.name`, `.name(args)`) → primary.
///
/// ## Notes
/// - Binary tiers are driven by the operator registry: an operator belongs to a tier when its registered
///   precedence equals that tier and its fixity is infix. Every binary tier is left-associative.
/// - Assignment is not an expression here; it is only parsed at statement position (see `expr_statement`).
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        self.nested(|p| p.logical())
    }

    fn logical(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        self.binary_tier(tier::LOGICAL, Self::relational)
    }

    fn relational(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        self.binary_tier(tier::RELATIONAL, Self::additive)
    }

    fn additive(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        self.binary_tier(tier::ADDITIVE, Self::multiplicative)
    }

    fn multiplicative(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        self.binary_tier(tier::MULTIPLICATIVE, Self::unary)
    }

    /// `operand (op operand)*` for every infix operator registered at `level`.
    fn binary_tier(
        &mut self,
        level: u8,
        operand: fn(&mut Self) -> Result<Spanned<Expr>, SyntaxError>,
    ) -> Result<Spanned<Expr>, SyntaxError> {
        let mut left = operand(self)?;
        while let Some(op) = self.infix_operator(level) {
            self.advance();
            let right = operand(self)?;
            let span = left.span.merge(right.span);
            let line = left.line;
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span, line);
        }
        Ok(left)
    }

    fn infix_operator(&self, level: u8) -> Option<BinaryOp> {
        let id = self.peek().operator_id()?;
        let info = operators::info_for(id);
        if info.fixity == Fixity::Infix && info.precedence == level {
            BinaryOp::from_operator(id)
        } else {
            None
        }
    }

    /// `('+'|'-')? postfix`
    fn unary(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let op = match self.peek().operator_id() {
            Some(OperatorId::Plus) => UnaryOp::Plus,
            Some(OperatorId::Minus) => UnaryOp::Neg,
            _ => return self.postfix(),
        };
        let start = self.start();
        self.advance();
        let operand = self.postfix()?;
        Ok(self.finish(Expr::Unary(op, Box::new(operand)), start))
    }

    /// `primary ('.' Identifier args?)*`
    fn postfix(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let start = self.start();
        let mut expr = self.primary()?;

        while self.match_punct(PunctuationId::Dot) {
            let name = self.identifier("Expect property name after '.'.")?;
            let node = if self.check_punct(PunctuationId::LParen) {
                let args = self.arguments("Expect '(' after method name.")?;
                Expr::MethodCall {
                    target: Some(Box::new(expr)),
                    name,
                    args,
                }
            } else {
                Expr::Field(Box::new(expr), name)
            };
            expr = self.finish(node, start);
        }

        Ok(expr)
    }

    fn primary(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let start = self.start();
        let kind = self.peek().kind;

        let node = match kind {
            TokenKind::Identifier => {
                let name = self.advance().text.clone();
                if self.check_punct(PunctuationId::LParen) {
                    let args = self.arguments("Expect '(' after method name.")?;
                    Expr::MethodCall {
                        target: None,
                        name,
                        args,
                    }
                } else {
                    Expr::Ident(name)
                }
            }
            TokenKind::Number => {
                let tok = self.advance();
                Expr::Literal(Literal::Number(tok.literal.clone().unwrap_or_else(|| tok.text.clone())))
            }
            TokenKind::StringLiteral => {
                let tok = self.advance();
                Expr::Literal(Literal::String(tok.literal.clone().unwrap_or_default()))
            }
            TokenKind::Keyword(KeywordId::This) => {
                self.advance();
                Expr::This
            }
            TokenKind::Keyword(KeywordId::Super) => {
                self.advance();
                self.expect_punct(PunctuationId::Dot, "Expect '.' after 'super'.")?;
                let name = self.identifier("Expect superclass method name.")?;
                let args = self.arguments("Expect '(' after superclass method name.")?;
                Expr::SuperCall { name, args }
            }
            TokenKind::Keyword(KeywordId::New) => {
                self.advance();
                let class_name = self.identifier("Expect class name after 'new'.")?;
                let args = self.arguments("Expect '(' after class name.")?;
                Expr::New { class_name, args }
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression()?;
                self.expect_punct(PunctuationId::RParen, "Expect ')' after expression.")?;
                inner.node
            }
            _ => return Err(self.error_at_current(Expected::Expression, "Expect expression.")),
        };

        Ok(self.finish(node, start))
    }

    /// `'(' (expression (',' expression)*)? ')'`. `msg` is the error reported when the `(` is missing.
    fn arguments(&mut self, msg: &str) -> Result<Vec<Spanned<Expr>>, SyntaxError> {
        self.expect_punct(PunctuationId::LParen, msg)?;
        let mut args = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expect ')' after arguments.")?;
        Ok(args)
    }
}
