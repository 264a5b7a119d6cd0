#![forbid(unsafe_code)]
//! Frontend for a Java language subset.
//!
//! This crate ties the syntax frontend (`jcompiler_syntax`) into a runnable tool: the [`pipeline`] runs lexing and
//! parsing over one source text and collects every diagnostic, and [`cli`] exposes that as the `jcompiler` binary
//! (file mode and an interactive prompt).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod pipeline;

pub use jcompiler_syntax::{ast, diagnostics, lexer, parser};

pub use pipeline::{RunReport, run_source};
