//! Provide the canonical language vocabulary for the jcompiler frontend.
//!
//! This crate is intentionally small and dependency-free. It contains the reserved-word, operator and
//! punctuation registries that the lexer, parser and diagnostics all agree on.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no frontend-specific types (tokens, AST).
//! - Registries are `const` tables, so lookups never allocate.

pub mod lang;
