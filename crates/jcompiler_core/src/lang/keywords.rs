//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `Class` and `classroom` are not keywords.
//! - Several words are reserved without being used by the grammar (`goto`, `const`, `switch`, ...). They still lex
//!   as keywords so they can never be used as identifiers.
//!
//! ## Examples
//! ```rust
//! use jcompiler_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::from_str("While"), None);
//! assert_eq!(keywords::category(KeywordId::Int), KeywordCategory::PrimitiveType);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    // Compilation unit
    Package,
    Import,
    Class,

    // Modifiers
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,

    // Primitive types
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Boolean,
    Void,

    // Control flow / statements
    If,
    Else,
    While,
    Do,
    Break,
    Continue,
    Return,
    Try,
    Catch,
    Finally,

    // Expressions
    Super,
    This,
    New,
    Instanceof,

    // Reserved, not used by the grammar
    Const,
    Default,
    Extends,
    Implements,
    Interface,
    Native,
    Synchronized,
    Throw,
    Throws,
    Transient,
    Volatile,
    Switch,
    Case,
    Goto,
}

/// High-level grouping used by the parser's lookahead checks and by tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Modifier,
    PrimitiveType,
    ControlFlow,
    Expression,
    Reserved,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Compilation unit
    info(KeywordId::Package, "package", KeywordCategory::Declaration),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    // Modifiers
    info(KeywordId::Public, "public", KeywordCategory::Modifier),
    info(KeywordId::Protected, "protected", KeywordCategory::Modifier),
    info(KeywordId::Private, "private", KeywordCategory::Modifier),
    info(KeywordId::Static, "static", KeywordCategory::Modifier),
    info(KeywordId::Abstract, "abstract", KeywordCategory::Modifier),
    info(KeywordId::Final, "final", KeywordCategory::Modifier),
    // Primitive types
    info(KeywordId::Byte, "byte", KeywordCategory::PrimitiveType),
    info(KeywordId::Short, "short", KeywordCategory::PrimitiveType),
    info(KeywordId::Int, "int", KeywordCategory::PrimitiveType),
    info(KeywordId::Long, "long", KeywordCategory::PrimitiveType),
    info(KeywordId::Char, "char", KeywordCategory::PrimitiveType),
    info(KeywordId::Float, "float", KeywordCategory::PrimitiveType),
    info(KeywordId::Double, "double", KeywordCategory::PrimitiveType),
    info(KeywordId::Boolean, "boolean", KeywordCategory::PrimitiveType),
    info(KeywordId::Void, "void", KeywordCategory::PrimitiveType),
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow),
    info(KeywordId::Catch, "catch", KeywordCategory::ControlFlow),
    info(KeywordId::Finally, "finally", KeywordCategory::ControlFlow),
    // Expressions
    info(KeywordId::Super, "super", KeywordCategory::Expression),
    info(KeywordId::This, "this", KeywordCategory::Expression),
    info(KeywordId::New, "new", KeywordCategory::Expression),
    info(KeywordId::Instanceof, "instanceof", KeywordCategory::Expression),
    // Reserved
    info(KeywordId::Const, "const", KeywordCategory::Reserved),
    info(KeywordId::Default, "default", KeywordCategory::Reserved),
    info(KeywordId::Extends, "extends", KeywordCategory::Reserved),
    info(KeywordId::Implements, "implements", KeywordCategory::Reserved),
    info(KeywordId::Interface, "interface", KeywordCategory::Reserved),
    info(KeywordId::Native, "native", KeywordCategory::Reserved),
    info(KeywordId::Synchronized, "synchronized", KeywordCategory::Reserved),
    info(KeywordId::Throw, "throw", KeywordCategory::Reserved),
    info(KeywordId::Throws, "throws", KeywordCategory::Reserved),
    info(KeywordId::Transient, "transient", KeywordCategory::Reserved),
    info(KeywordId::Volatile, "volatile", KeywordCategory::Reserved),
    info(KeywordId::Switch, "switch", KeywordCategory::Reserved),
    info(KeywordId::Case, "case", KeywordCategory::Reserved),
    info(KeywordId::Goto, "goto", KeywordCategory::Reserved),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` for the nine primitive type keywords (including `void`).
pub fn is_primitive_type(id: KeywordId) -> bool {
    category(id) == KeywordCategory::PrimitiveType
}

/// Return `true` for the declaration modifiers (`public`, `static`, ...).
pub fn is_modifier(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Modifier
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise (the caller treats the text as an identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
    }
}
