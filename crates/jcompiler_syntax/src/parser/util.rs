/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “decl”, “stmt” or “expr” (identifiers, dotted names, primitive types).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self, msg: &str) -> Result<Ident, SyntaxError> {
        if self.peek().kind == TokenKind::Identifier {
            Ok(self.advance().text.clone())
        } else {
            Err(self.error_at_current(Expected::Identifier, msg))
        }
    }

    /// `Identifier ('.' Identifier)*`, joined with dots.
    fn qualified_name(&mut self, msg: &str) -> Result<String, SyntaxError> {
        let mut name = self.identifier(msg)?;
        while self.match_punct(PunctuationId::Dot) {
            name.push('.');
            name.push_str(&self.identifier("Expect identifier after '.'.")?);
        }
        Ok(name)
    }

    fn primitive_type(&mut self) -> Result<PrimitiveType, SyntaxError> {
        match self.peek().kind.primitive_type() {
            Some(ty) => {
                self.advance();
                Ok(ty)
            }
            None => Err(self.error_at_current(Expected::Type, "Expect type.")),
        }
    }
}
