//! CLI module for the jcompiler frontend
//!
//! ## Modes
//!
//! - `jcompiler <file>` - lex and parse one file, report diagnostics, exit `65` on any
//! - `jcompiler` - interactive prompt; each line is run independently, `exit` ends the session
//!
//! Debug flags (`--tokens`, `--ast`, `--fancy`) change what is printed, never the exit status.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

pub use commands::RunOptions;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations (sysexits values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// `EX_USAGE`
    pub const USAGE: ExitCode = ExitCode(64);
    /// `EX_DATAERR`: the input had diagnostics.
    pub const DATA_ERR: ExitCode = ExitCode(65);
    /// `EX_NOINPUT`: the input file could not be read.
    pub const NO_INPUT: ExitCode = ExitCode(66);
    /// `EX_IOERR`
    pub const IO_ERR: ExitCode = ExitCode(74);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }

    pub fn io(err: io::Error) -> Self {
        Self::new(format!("I/O error: {err}"), ExitCode::IO_ERR)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const USAGE: &str = "Usage: jcompiler [FILE]";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexer and parser for a Java language subset
#[derive(Parser, Debug, Default)]
#[command(name = "jcompiler")]
#[command(version)]
#[command(about = "Lexer and parser for a Java language subset", long_about = None)]
pub struct Cli {
    /// Source file to check; omit to start the interactive prompt
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// Print the token stream (debug)
    #[arg(long)]
    pub tokens: bool,

    /// Print the parsed AST (debug)
    #[arg(long)]
    pub ast: bool,

    /// Render diagnostics with source context instead of the one-line format
    #[arg(long)]
    pub fancy: bool,
}

impl Cli {
    fn options(&self) -> RunOptions {
        RunOptions {
            tokens: self.tokens,
            ast: self.ast,
            fancy: self.fancy,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help / --version go to stdout and succeed; real usage errors exit EX_USAGE.
            let code = if err.use_stderr() { ExitCode::USAGE } else { ExitCode::SUCCESS };
            let _ = err.print();
            process::exit(code.0);
        }
    };

    match execute(&cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed command line and return the exit code.
pub fn execute(cli: &Cli) -> CliResult<ExitCode> {
    let options = cli.options();
    match cli.paths.as_slice() {
        [] => {
            let stdin = io::stdin();
            commands::run_prompt(stdin.lock(), io::stdout(), io::stderr(), options)
        }
        [path] => commands::run_file(path, options),
        _ => Err(CliError::usage(USAGE)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["jcompiler", "--tokens", "--fancy", "A.java"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("A.java")]);
        assert!(cli.tokens);
        assert!(!cli.ast);
        assert!(cli.fancy);
    }

    #[test]
    fn test_too_many_paths_is_usage_error() {
        let cli = Cli::try_parse_from(["jcompiler", "A.java", "B.java"]).unwrap();
        let err = execute(&cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::USAGE);
        assert_eq!(err.to_string(), USAGE);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["jcompiler", "--bogus"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
