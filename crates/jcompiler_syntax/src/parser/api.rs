/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `jcompiler_syntax::lexer`.
///
/// ## Returns
/// A [`ParseOutcome`] holding the program built so far and every syntax error recorded. Use
/// [`ParseOutcome::into_result`] for a `Result<Program, Vec<SyntaxError>>`.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    Parser::new(tokens).parse()
}
