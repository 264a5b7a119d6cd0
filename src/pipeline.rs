//! The lex → parse pipeline for one unit of source text.
//!
//! Each call to [`run_source`] produces a fresh [`RunReport`]; there is no shared "had error" state between runs, so
//! the interactive prompt simply starts a new report for every line.

use jcompiler_syntax::ast::Program;
use jcompiler_syntax::diagnostics::SyntaxError;
use jcompiler_syntax::lexer::{self, Token};
use jcompiler_syntax::parser;

/// Everything one run over a source text produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub tokens: Vec<Token>,
    pub program: Program,
    /// Lexical diagnostics first, then syntactic ones, each in source order.
    pub diagnostics: Vec<SyntaxError>,
}

impl RunReport {
    /// Return `true` if any diagnostic was recorded during the run.
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// One fixed-format line per diagnostic, e.g. `[line 1] Error at ';': Expect expression.`
    pub fn report_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.diagnostics.iter().map(SyntaxError::report)
    }
}

/// Lex and parse `source`, collecting every diagnostic.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn run_source(source: &str) -> RunReport {
    let lexed = lexer::lex(source);
    let outcome = parser::parse(&lexed.tokens);

    let mut diagnostics = lexed.errors;
    diagnostics.extend(outcome.errors);

    tracing::debug!(
        tokens = lexed.tokens.len(),
        diagnostics = diagnostics.len(),
        "finished run"
    );

    RunReport {
        tokens: lexed.tokens,
        program: outcome.program,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_run() {
        let report = run_source("class A { int x; }");
        assert!(!report.had_error());
        assert_eq!(report.tokens.len(), 8);
        assert!(report.program.class_decl.is_some());
    }

    #[test]
    fn test_lexical_diagnostics_come_first() {
        let report = run_source("class A { int x = # }");
        let lines: Vec<_> = report.report_lines().collect();
        assert_eq!(
            lines,
            vec![
                "[line 1] Error : Unexpected character '#'.".to_string(),
                "[line 1] Error at '}': Expect expression.".to_string(),
            ]
        );
    }

    #[test]
    fn test_each_run_starts_clean() {
        assert!(run_source("class {").had_error());
        assert!(!run_source("class B {}").had_error());
    }
}
