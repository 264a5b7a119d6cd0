//! Command implementations: file mode and the interactive prompt.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use miette::NamedSource;

use super::{CliError, CliResult, ExitCode};
use crate::pipeline::{RunReport, run_source};

/// What to print besides diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print every token, one per line.
    pub tokens: bool,
    /// Pretty-print the AST.
    pub ast: bool,
    /// Render diagnostics through miette with source context.
    pub fancy: bool,
}

/// Read a source file, mapping failure to `EX_NOINPUT`.
pub fn read_source(path: &Path) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Error reading file '{}': {}", path.display(), e), ExitCode::NO_INPUT))
}

/// Run the pipeline once over a file.
///
/// Returns [`ExitCode::DATA_ERR`] if any diagnostic was recorded.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn run_file(path: &Path, options: RunOptions) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let report = run_source(&source);

    let name = path.display().to_string();
    emit(&report, &name, &source, options, &mut std::io::stdout(), &mut std::io::stderr()).map_err(CliError::io)?;

    if report.had_error() {
        Ok(ExitCode::DATA_ERR)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Interactive loop: one pipeline run per line until EOF or a line equal to `exit`.
///
/// Diagnostics never end the session, so this returns [`ExitCode::SUCCESS`] unless the streams fail.
pub fn run_prompt<R, W, E>(input: R, mut out: W, mut err: E, options: RunOptions) -> CliResult<ExitCode>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "> ").map_err(CliError::io)?;
        out.flush().map_err(CliError::io)?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(CliError::io)?;
        if line == "exit" {
            break;
        }

        let report = run_source(&line);
        emit(&report, "<stdin>", &line, options, &mut out, &mut err).map_err(CliError::io)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the requested debug output to `out` and every diagnostic to `err`.
fn emit(
    report: &RunReport,
    name: &str,
    source: &str,
    options: RunOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<()> {
    if options.tokens {
        for tok in &report.tokens {
            match &tok.literal {
                Some(lit) => writeln!(out, "{} {:?} '{}' {}", tok.line, tok.kind, tok.text, lit)?,
                None => writeln!(out, "{} {:?} '{}'", tok.line, tok.kind, tok.text)?,
            }
        }
    }
    if options.ast {
        writeln!(out, "{:#?}", report.program)?;
    }

    for diagnostic in &report.diagnostics {
        if options.fancy {
            let rendered = miette::Report::new(diagnostic.clone())
                .with_source_code(NamedSource::new(name, source.to_string()));
            writeln!(err, "{:?}", rendered)?;
        } else {
            writeln!(err, "{}", diagnostic.report())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompt(input: &str, options: RunOptions) -> (ExitCode, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_prompt(Cursor::new(input), &mut out, &mut err, options).unwrap();
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_prompt_runs_each_line() {
        let (code, out, err) = prompt("class A {}\nclass {\n", RunOptions::default());
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "> > > ");
        assert_eq!(err, "[line 1] Error at '{': Expect class name.\n");
    }

    #[test]
    fn test_prompt_stops_at_exit() {
        let (_, out, err) = prompt("exit\nclass {\n", RunOptions::default());
        assert_eq!(out, "> ");
        assert!(err.is_empty());
    }

    #[test]
    fn test_prompt_error_does_not_leak_into_next_line() {
        let (code, _, err) = prompt("@\nclass A {}\n", RunOptions::default());
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(err.lines().count(), 2);
        assert!(err.starts_with("[line 1] Error : Unexpected character '@'."));
    }

    #[test]
    fn test_tokens_output() {
        let options = RunOptions {
            tokens: true,
            ..RunOptions::default()
        };
        let (_, out, _) = prompt("x = 1.5;\n", options);
        assert!(out.contains("1 Identifier 'x'"));
        assert!(out.contains("'1.5' 1.5"));
    }

    #[test]
    fn test_fancy_output_names_source() {
        let options = RunOptions {
            fancy: true,
            ..RunOptions::default()
        };
        let (_, _, err) = prompt("class A { int x }\n", options);
        assert!(err.contains("<stdin>"));
        assert!(err.contains("Expect ';' after field declaration."));
    }

    #[test]
    fn test_missing_file_is_no_input() {
        let err = read_source(Path::new("definitely/not/here.java")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::NO_INPUT);
        assert!(err.message.contains("definitely/not/here.java"));
    }
}
