//! Parser for the Java subset.
//!
//! Converts a token stream into an AST [`Program`] by recursive descent. The parser is resilient: on a syntax error
//! it records a [`SyntaxError`], synchronizes at the nearest statement or member boundary and keeps going, so one
//! run reports every independent problem.
//!
//! ## Examples
//!
//! ```rust
//! use jcompiler_syntax::{lexer, parser};
//!
//! let source = "class Counter { int n; void tick() { n += 1; } }";
//! let tokens = lexer::scan(source);
//! let program = parser::parse(&tokens).into_result().unwrap();
//! assert_eq!(program.class_decl.unwrap().node.name, "Counter");
//! ```

use crate::ast::*;
use crate::diagnostics::{Expected, SyntaxError};
use crate::lexer::{Token, TokenKind};
use jcompiler_core::lang::keywords::KeywordId;
use jcompiler_core::lang::operators::{self, Fixity, OperatorId, tier};
use jcompiler_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
