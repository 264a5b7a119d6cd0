/// Statement parsing methods.
///
/// This chunk parses blocks and every statement form: local declarations, `if`/`else`, loops, jumps, `try`,
/// labeled statements and expression statements (including assignment and `++`/`--`).
///
/// ## Notes
/// - A block is a recovery point: a broken statement is reported, the parser synchronizes, and the next statement
///   starts fresh.
/// - The dangling `else` binds to the innermost `if` because `if_stmt` greedily takes an `else` when it sees one.
impl<'a> Parser<'a> {
    // ========================================================================
    // Blocks
    // ========================================================================

    /// `'{' statement* '}'`. `msg` is the error reported when the `{` is missing.
    fn block(&mut self, msg: &str) -> Result<Block, SyntaxError> {
        self.expect_punct(PunctuationId::LBrace, msg)?;
        let mut statements = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            if let Some(stmt) = self.recover(Self::statement, SyncPoint::Statement) {
                statements.push(stmt);
            }
        }
        self.expect_punct(PunctuationId::RBrace, "Expect '}' after block.")?;
        Ok(Block { statements })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, SyntaxError> {
        self.nested(|p| {
            let start = p.start();
            let stmt = p.statement_kind()?;
            Ok(p.finish(stmt, start))
        })
    }

    fn statement_kind(&mut self) -> Result<Statement, SyntaxError> {
        let kind = self.peek().kind;

        if kind.is_punctuation(PunctuationId::LBrace) {
            return Ok(Statement::Block(self.block("Expect '{'.")?));
        }
        if kind.is_punctuation(PunctuationId::Semicolon) {
            self.advance();
            return Ok(Statement::Empty);
        }
        if kind.primitive_type().is_some() {
            let decl = self.local_var_decl()?;
            self.expect_punct(PunctuationId::Semicolon, "Expect ';' after variable declaration.")?;
            return Ok(Statement::VarDecl(decl));
        }
        if kind == TokenKind::Identifier && self.peek_next().kind.is_punctuation(PunctuationId::Colon) {
            return self.labeled_stmt();
        }

        match kind.keyword_id() {
            Some(KeywordId::If) => self.if_stmt(),
            Some(KeywordId::While) => self.while_stmt(),
            Some(KeywordId::Do) => self.do_stmt(),
            Some(KeywordId::Break) => {
                self.advance();
                let label = self.optional_label();
                self.expect_punct(PunctuationId::Semicolon, "Expect ';' after 'break'.")?;
                Ok(Statement::Break(label))
            }
            Some(KeywordId::Continue) => {
                self.advance();
                let label = self.optional_label();
                self.expect_punct(PunctuationId::Semicolon, "Expect ';' after 'continue'.")?;
                Ok(Statement::Continue(label))
            }
            Some(KeywordId::Return) => self.return_stmt(),
            Some(KeywordId::Try) => self.try_stmt(),
            Some(KeywordId::This | KeywordId::Super | KeywordId::New) | None => self.expr_statement(),
            Some(_) => Err(self.error_at_current(Expected::Statement, "Expect statement.")),
        }
    }

    /// `type declarator (',' declarator)*`
    fn local_var_decl(&mut self) -> Result<VarDecl, SyntaxError> {
        let ty = self.primitive_type()?;
        let mut declarators = vec![self.declarator("Expect variable name.")?];
        while self.match_punct(PunctuationId::Comma) {
            declarators.push(self.declarator("Expect variable name.")?);
        }
        Ok(VarDecl { ty, declarators })
    }

    fn labeled_stmt(&mut self) -> Result<Statement, SyntaxError> {
        let label = self.identifier("Expect label.")?;
        self.expect_punct(PunctuationId::Colon, "Expect ':' after label.")?;
        let body = self.statement()?;
        Ok(Statement::Labeled(LabeledStmt {
            label,
            body: Box::new(body),
        }))
    }

    fn if_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::If, "Expect 'if'.")?;
        let condition = self.condition("if")?;
        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_keyword(KeywordId::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Statement::If(IfStmt {
            condition,
            then_branch,
            else_branch,
        }))
    }

    fn while_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::While, "Expect 'while'.")?;
        let condition = self.condition("while")?;
        let body = Box::new(self.statement()?);
        Ok(Statement::While(WhileStmt { condition, body }))
    }

    /// `'do' statement 'while' '(' expression ')' ';'`
    fn do_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Do, "Expect 'do'.")?;
        let body = Box::new(self.statement()?);
        self.expect_keyword(KeywordId::While, "Expect 'while' after do body.")?;
        let condition = self.condition("while")?;
        self.expect_punct(PunctuationId::Semicolon, "Expect ';' after do-while condition.")?;
        Ok(Statement::Do(DoStmt { body, condition }))
    }

    /// Parenthesized condition of `if` / `while`.
    fn condition(&mut self, keyword: &str) -> Result<Spanned<Expr>, SyntaxError> {
        self.expect_punct(PunctuationId::LParen, &format!("Expect '(' after '{}'.", keyword))?;
        let condition = self.expression()?;
        self.expect_punct(PunctuationId::RParen, &format!("Expect ')' after {} condition.", keyword))?;
        Ok(condition)
    }

    fn optional_label(&mut self) -> Option<Ident> {
        if self.peek().kind == TokenKind::Identifier {
            Some(self.advance().text.clone())
        } else {
            None
        }
    }

    fn return_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Return, "Expect 'return'.")?;
        let value = if self.check_punct(PunctuationId::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect_punct(PunctuationId::Semicolon, "Expect ';' after return value.")?;
        Ok(Statement::Return(value))
    }

    /// `'try' block catchClause* ('finally' block)?`
    fn try_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Try, "Expect 'try'.")?;
        let body = self.block("Expect '{' after 'try'.")?;

        let mut catches = Vec::new();
        while self.match_keyword(KeywordId::Catch) {
            self.expect_punct(PunctuationId::LParen, "Expect '(' after 'catch'.")?;
            let exception_type = self.identifier("Expect exception type.")?;
            let name = self.identifier("Expect exception parameter name.")?;
            self.expect_punct(PunctuationId::RParen, "Expect ')' after catch parameter.")?;
            let body = self.block("Expect '{' before catch body.")?;
            catches.push(CatchClause {
                exception_type,
                name,
                body,
            });
        }

        let finally = if self.match_keyword(KeywordId::Finally) {
            Some(self.block("Expect '{' after 'finally'.")?)
        } else {
            None
        };

        // Reported without unwinding: the try block itself parsed fine.
        if catches.is_empty() && finally.is_none() {
            let err = self.error_at_current(Expected::CatchOrFinally, "Expect 'catch' or 'finally' after try block.");
            self.report(err);
        }

        Ok(Statement::Try(TryStmt { body, catches, finally }))
    }

    // ========================================================================
    // Expression statements
    // ========================================================================

    /// `assignment | ('++'|'--') target | target ('++'|'--') | expression`, followed by `;`.
    fn expr_statement(&mut self) -> Result<Statement, SyntaxError> {
        let expr = if let Some(op) = self.increment_operator(true) {
            let start = self.start();
            let op_token = self.advance().clone();
            let target = self.postfix()?;
            self.check_assignable(&target, &op_token);
            self.finish(Expr::Unary(op, Box::new(target)), start)
        } else {
            let start = self.start();
            let expr = self.expression()?;
            if let Some(op) = self.increment_operator(false) {
                let op_token = self.advance().clone();
                self.check_assignable(&expr, &op_token);
                self.finish(Expr::Unary(op, Box::new(expr)), start)
            } else if self.assign_operator().is_some() {
                self.assignment(expr)?
            } else {
                expr
            }
        };

        self.expect_punct(PunctuationId::Semicolon, "Expect ';' after expression.")?;
        Ok(Statement::Expr(expr))
    }

    /// Parse the rest of a (right-associative) assignment chain whose first target is `target`.
    fn assignment(&mut self, target: Spanned<Expr>) -> Result<Spanned<Expr>, SyntaxError> {
        let mut targets = Vec::new();
        let mut current = target;

        // Iterative so that long `a = b = c = ...` chains do not grow the stack.
        while let Some(op) = self.assign_operator() {
            let op_token = self.advance().clone();
            self.check_assignable(&current, &op_token);
            targets.push((current, op));
            current = self.expression()?;
        }

        let mut value = current;
        while let Some((target, op)) = targets.pop() {
            let span = target.span.merge(value.span);
            let line = target.line;
            value = Spanned::new(
                Expr::Assign {
                    target: Box::new(target),
                    op,
                    value: Box::new(value),
                },
                span,
                line,
            );
        }
        Ok(value)
    }

    fn assign_operator(&self) -> Option<AssignOp> {
        self.peek()
            .operator_id()
            .filter(|id| operators::is_assignment(*id))
            .and_then(AssignOp::from_operator)
    }

    /// `++`/`--` are the registry's prefix operators at the unary tier; `prefix` picks the pre or post form.
    fn increment_operator(&self, prefix: bool) -> Option<UnaryOp> {
        let id = self.peek().operator_id()?;
        let info = operators::info_for(id);
        if info.fixity != Fixity::Prefix || info.precedence != tier::UNARY {
            return None;
        }
        Some(match (id == OperatorId::PlusPlus, prefix) {
            (true, true) => UnaryOp::PreIncrement,
            (false, true) => UnaryOp::PreDecrement,
            (true, false) => UnaryOp::PostIncrement,
            (false, false) => UnaryOp::PostDecrement,
        })
    }

    /// Report (without unwinding) an assignment or `++`/`--` applied to something that is not a variable or field.
    fn check_assignable(&mut self, target: &Spanned<Expr>, op_token: &Token) {
        if !target.node.is_assignable() {
            self.report(SyntaxError::UnexpectedToken {
                expected: Expected::Identifier,
                found: op_token.kind,
                lexeme: op_token.text.clone(),
                message: "Invalid assignment target.".to_string(),
                line: op_token.line,
                span: op_token.span,
            });
        }
    }
}
