/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`ParseOutcome`] it produces and the top-level compilation-unit
/// production.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Maximum nesting before the parser gives up on a construct. Statements and expressions (including each
/// parenthesized group and call argument) draw on this one budget.
const MAX_NESTING: usize = 128;

/// Start of a node being parsed: byte offset and line of its first token.
#[derive(Debug, Clone, Copy)]
struct Start {
    offset: usize,
    line: usize,
}

/// Which recovery point is synchronizing, and so which extra tokens it may resume at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncPoint {
    /// A statement inside a block.
    Statement,
    /// A member inside a class body: also resumes before a member modifier or a type.
    Member,
    /// A top-level declaration: also resumes before `import`, `class` or a modifier.
    TopLevel,
}

/// Everything one parse produced: the (possibly partial) program and the errors recorded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub program: Program,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutcome {
    /// Return `true` if no syntax error was recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into the `Result` shape used by callers that only want a clean tree.
    ///
    /// ## Errors
    /// Returns every recorded [`SyntaxError`] if there was at least one.
    pub fn into_result(self) -> Result<Program, Vec<SyntaxError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by synchronizing at statement, member and top-level
///   boundaries.
/// - `Illegal` tokens were already reported by the lexer and are dropped from the cursor up front.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: Vec<&'a Token>,
    /// Returned by `peek` once the cursor runs off the end.
    eof: Token,
    pos: usize,
    errors: Vec<SyntaxError>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `jcompiler_syntax::lexer`. A missing trailing `Eof` is tolerated.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::eof(last.line, last.span.end),
            None => Token::eof(1, 0),
        };
        Self {
            tokens: tokens
                .iter()
                .filter(|t| !t.kind.is_trivia() && t.kind != TokenKind::Eof)
                .collect(),
            eof,
            pos: 0,
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Parse the entire token stream.
    ///
    /// Never fails: errors are collected in [`ParseOutcome::errors`] next to whatever could be built.
    pub fn parse(mut self) -> ParseOutcome {
        let program = self.compilation_unit();
        tracing::debug!(errors = self.errors.len(), "parsed compilation unit");
        ParseOutcome {
            program,
            errors: self.errors,
        }
    }

    /// `packageDecl? importDecl* classDecl Eof`
    fn compilation_unit(&mut self) -> Program {
        let mut program = Program::default();

        if self.check_keyword(KeywordId::Package) {
            program.package = self.recover(Self::package_decl, SyncPoint::TopLevel);
        }

        while self.check_keyword(KeywordId::Import) {
            if let Some(import) = self.recover(Self::import_decl, SyncPoint::TopLevel) {
                program.imports.push(import);
            }
        }

        program.class_decl = self.class_declaration();

        if !self.is_at_end() {
            let err = self.error_at_current(Expected::EndOfInput, "Expect end of input after class declaration.");
            self.report(err);
            while !self.is_at_end() {
                self.advance();
            }
        }

        program
    }

    /// Parse the class declaration. A failed attempt is retried while another `class` keyword is ahead.
    fn class_declaration(&mut self) -> Option<Spanned<ClassDecl>> {
        let mut retry = false;
        while self.locate_class(retry) {
            if let Some(class) = self.recover(Self::class_decl, SyncPoint::TopLevel) {
                return Some(class);
            }
            retry = true;
        }
        None
    }

    /// Position the cursor at the start of the class declaration.
    ///
    /// Returns `false` when no `class` keyword is left in the input. That is reported as a missing class only on the
    /// first attempt; after a failed attempt the class was already found and reported.
    fn locate_class(&mut self, retry: bool) -> bool {
        let found = self.tokens[self.pos..]
            .iter()
            .any(|t| t.kind.is_keyword(KeywordId::Class));

        if !found {
            if !retry {
                let tok = self.peek();
                let err = SyntaxError::MissingClassDeclaration {
                    found: tok.kind,
                    lexeme: tok.text.clone(),
                    line: tok.line,
                    span: tok.span,
                };
                self.report(err);
            }
            while !self.is_at_end() {
                self.advance();
            }
            return false;
        }

        if self.at_class_start() {
            return true;
        }

        let err = self.error_at_current(
            Expected::Token(TokenKind::Keyword(KeywordId::Class)),
            "Expect class declaration.",
        );
        self.report(err);
        while !self.at_class_start() {
            self.advance();
        }
        true
    }

    fn at_class_start(&self) -> bool {
        self.check_keyword(KeywordId::Class) || self.peek().kind.modifier().is_some()
    }
}
