//! Syntax frontend for a Java-like language subset: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the CLI, tests, and fuzzing.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not do name resolution, type checking, or code generation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `jcompiler_core::lang` registries.
//! - Both stages are resilient: the lexer never stops on bad input and the parser recovers at statement and
//!   member boundaries, so a single run reports every independent error.
//!
//! ## Examples
//! ```rust
//! use jcompiler_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("class A { int x; }");
//! let outcome = parser::parse(&lexed.tokens);
//! assert!(outcome.errors.is_empty());
//! assert_eq!(outcome.program.class_decl.unwrap().node.members.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
