/// Declaration parsing methods.
///
/// This chunk parses the compilation-unit header (`package`, `import`), the class declaration and its members
/// (fields and methods, with their modifier lists).
///
/// ## Notes
/// - Field vs. method is decided by a single token of lookahead after `modifiers type name`: `(` starts a method.
/// - The class body is a recovery point: a broken member is reported and skipped, and the next member is parsed
///   fresh.
impl<'a> Parser<'a> {
    // ========================================================================
    // Compilation unit header
    // ========================================================================

    fn package_decl(&mut self) -> Result<String, SyntaxError> {
        self.expect_keyword(KeywordId::Package, "Expect 'package'.")?;
        let name = self.qualified_name("Expect package name.")?;
        self.expect_punct(PunctuationId::Semicolon, "Expect ';' after package declaration.")?;
        Ok(name)
    }

    fn import_decl(&mut self) -> Result<String, SyntaxError> {
        self.expect_keyword(KeywordId::Import, "Expect 'import'.")?;
        let name = self.qualified_name("Expect import name.")?;
        self.expect_punct(PunctuationId::Semicolon, "Expect ';' after import declaration.")?;
        Ok(name)
    }

    // ========================================================================
    // Class
    // ========================================================================

    fn class_decl(&mut self) -> Result<Spanned<ClassDecl>, SyntaxError> {
        let start = self.start();
        let modifiers = self.class_modifiers();
        self.expect_keyword(KeywordId::Class, "Expect 'class' after class modifiers.")?;
        let name = self.identifier("Expect class name.")?;
        self.expect_punct(PunctuationId::LBrace, "Expect '{' before class body.")?;

        let mut members = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            if let Some(member) = self.recover(Self::member, SyncPoint::Member) {
                members.push(member);
            }
        }

        // A missing `}` still leaves a usable class.
        if let Err(err) = self.expect_punct(PunctuationId::RBrace, "Expect '}' after class body.") {
            self.report(err);
        }

        Ok(self.finish(
            ClassDecl {
                modifiers,
                name,
                members,
            },
            start,
        ))
    }

    /// Modifiers in front of `class`. Member-only modifiers are reported and skipped.
    fn class_modifiers(&mut self) -> ModifierSet {
        let mut modifiers = ModifierSet::new();
        while let Some(modifier) = self.peek().kind.modifier() {
            if !modifier.is_class_modifier() {
                let err = self.error_at_current(
                    Expected::Token(TokenKind::Keyword(KeywordId::Class)),
                    "Modifier not allowed on a class.",
                );
                self.report(err);
                self.advance();
                continue;
            }
            self.push_modifier(&mut modifiers, modifier);
        }
        modifiers
    }

    /// Modifiers in front of a field or method.
    fn member_modifiers(&mut self) -> ModifierSet {
        let mut modifiers = ModifierSet::new();
        while let Some(modifier) = self.peek().kind.modifier().filter(|m| m.is_member_modifier()) {
            self.push_modifier(&mut modifiers, modifier);
        }
        modifiers
    }

    /// Consume the current modifier token, reporting a repeat.
    fn push_modifier(&mut self, modifiers: &mut ModifierSet, modifier: Modifier) {
        let tok = self.advance();
        let (line, span) = (tok.line, tok.span);
        if !modifiers.insert(modifier) {
            self.report(SyntaxError::RepeatedModifier { modifier, line, span });
        }
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// `modifier* type Identifier (fieldRest | methodRest)`
    fn member(&mut self) -> Result<Spanned<Member>, SyntaxError> {
        let start = self.start();
        let modifiers = self.member_modifiers();

        if self.peek().kind.primitive_type().is_none() {
            let expected = if modifiers.is_empty() { Expected::Member } else { Expected::Type };
            let message = if modifiers.is_empty() {
                "Expect field or method declaration."
            } else {
                "Expect type after modifiers."
            };
            return Err(self.error_at_current(expected, message));
        }
        let ty = self.primitive_type()?;
        let name = self.identifier("Expect member name.")?;

        let member = if self.check_punct(PunctuationId::LParen) {
            Member::Method(self.method_rest(modifiers, ty, name)?)
        } else {
            Member::Field(self.field_rest(modifiers, ty, name)?)
        };
        Ok(self.finish(member, start))
    }

    /// `('=' expression)? (',' Identifier ('=' expression)?)* ';'`
    fn field_rest(&mut self, modifiers: ModifierSet, ty: PrimitiveType, name: Ident) -> Result<FieldDecl, SyntaxError> {
        let initializer = self.initializer()?;
        let mut extra = Vec::new();
        while self.match_punct(PunctuationId::Comma) {
            extra.push(self.declarator("Expect field name.")?);
        }
        self.expect_punct(PunctuationId::Semicolon, "Expect ';' after field declaration.")?;
        Ok(FieldDecl {
            modifiers,
            ty,
            name,
            initializer,
            extra,
        })
    }

    /// `'(' (param (',' param)*)? ')' block`
    fn method_rest(
        &mut self,
        modifiers: ModifierSet,
        return_type: PrimitiveType,
        name: Ident,
    ) -> Result<MethodDecl, SyntaxError> {
        self.expect_punct(PunctuationId::LParen, "Expect '(' after method name.")?;
        let mut params = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                let ty = self.primitive_type()?;
                let name = self.identifier("Expect parameter name.")?;
                params.push(Param { ty, name });
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, "Expect ')' after parameters.")?;
        let body = self.block("Expect '{' before method body.")?;
        Ok(MethodDecl {
            modifiers,
            return_type,
            name,
            params,
            body,
        })
    }

    /// `Identifier ('=' expression)?`, shared by fields and local variables.
    fn declarator(&mut self, msg: &str) -> Result<Declarator, SyntaxError> {
        let name = self.identifier(msg)?;
        let initializer = self.initializer()?;
        Ok(Declarator { name, initializer })
    }

    fn initializer(&mut self) -> Result<Option<Spanned<Expr>>, SyntaxError> {
        if self.check_op(OperatorId::Assign) {
            self.advance();
            Ok(Some(self.expression()?))
        } else {
            Ok(None)
        }
    }
}
