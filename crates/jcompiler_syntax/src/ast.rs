//! Abstract Syntax Tree definitions.
//!
//! This module defines the AST node types for the supported Java subset: one compilation unit with an optional
//! package, imports, and exactly one class whose members are fields and methods over primitive types.
//!
//! ## Notes
//! - Every node exclusively owns its children (`Box`/`Vec`); there is no sharing and no cycles.
//! - Nodes that diagnostics can point at are wrapped in [`Spanned`], which records the byte span and the line of
//!   the first token.

use std::collections::BTreeSet;
use std::fmt;

use jcompiler_core::lang::keywords::{self, KeywordId};
use jcompiler_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
    /// 1-based line of the node's first token.
    pub line: usize,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span, line: usize) -> Self {
        Self { node, span, line }
    }
}

pub type Ident = String;

/// A compilation unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Dotted package name, e.g. `com.example`.
    pub package: Option<String>,
    /// Dotted import names in source order, e.g. `java.util.List`.
    pub imports: Vec<String>,
    /// `None` only when no class declaration could be found.
    pub class_decl: Option<Spanned<ClassDecl>>,
}

// ============================================================================
// Modifiers and types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
}

impl Modifier {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Public => Some(Modifier::Public),
            KeywordId::Protected => Some(Modifier::Protected),
            KeywordId::Private => Some(Modifier::Private),
            KeywordId::Static => Some(Modifier::Static),
            KeywordId::Abstract => Some(Modifier::Abstract),
            KeywordId::Final => Some(Modifier::Final),
            _ => None,
        }
    }

    pub fn keyword(self) -> KeywordId {
        match self {
            Modifier::Public => KeywordId::Public,
            Modifier::Protected => KeywordId::Protected,
            Modifier::Private => KeywordId::Private,
            Modifier::Static => KeywordId::Static,
            Modifier::Abstract => KeywordId::Abstract,
            Modifier::Final => KeywordId::Final,
        }
    }

    /// Modifiers accepted in front of `class`.
    pub fn is_class_modifier(self) -> bool {
        matches!(self, Modifier::Public | Modifier::Abstract | Modifier::Final)
    }

    /// Modifiers accepted in front of a field or method.
    pub fn is_member_modifier(self) -> bool {
        !matches!(self, Modifier::Abstract)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", keywords::as_str(self.keyword()))
    }
}

/// An unordered set of modifiers; repeats are reported by the parser and collapse here.
pub type ModifierSet = BTreeSet<Modifier>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Boolean,
    Void,
}

impl PrimitiveType {
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Byte => Some(PrimitiveType::Byte),
            KeywordId::Short => Some(PrimitiveType::Short),
            KeywordId::Int => Some(PrimitiveType::Int),
            KeywordId::Long => Some(PrimitiveType::Long),
            KeywordId::Char => Some(PrimitiveType::Char),
            KeywordId::Float => Some(PrimitiveType::Float),
            KeywordId::Double => Some(PrimitiveType::Double),
            KeywordId::Boolean => Some(PrimitiveType::Boolean),
            KeywordId::Void => Some(PrimitiveType::Void),
            _ => None,
        }
    }

    pub fn keyword(self) -> KeywordId {
        match self {
            PrimitiveType::Byte => KeywordId::Byte,
            PrimitiveType::Short => KeywordId::Short,
            PrimitiveType::Int => KeywordId::Int,
            PrimitiveType::Long => KeywordId::Long,
            PrimitiveType::Char => KeywordId::Char,
            PrimitiveType::Float => KeywordId::Float,
            PrimitiveType::Double => KeywordId::Double,
            PrimitiveType::Boolean => KeywordId::Boolean,
            PrimitiveType::Void => KeywordId::Void,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", keywords::as_str(self.keyword()))
    }
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub modifiers: ModifierSet,
    pub name: Ident,
    pub members: Vec<Spanned<Member>>,
}

impl ClassDecl {
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match &m.node {
            Member::Field(f) => Some(f),
            Member::Method(_) => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match &m.node {
            Member::Method(m) => Some(m),
            Member::Field(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
}

/// `int a = 1, b, c = 2;`: `a` is the primary declarator, `b` and `c` are in `extra`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: ModifierSet,
    pub ty: PrimitiveType,
    pub name: Ident,
    pub initializer: Option<Spanned<Expr>>,
    pub extra: Vec<Declarator>,
}

impl FieldDecl {
    /// Names declared after the first one, in source order.
    pub fn extra_names(&self) -> impl Iterator<Item = &str> {
        self.extra.iter().map(|d| d.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: Ident,
    pub initializer: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub modifiers: ModifierSet,
    pub return_type: PrimitiveType,
    pub name: Ident,
    pub params: Vec<Param>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: PrimitiveType,
    pub name: Ident,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    Do(DoStmt),
    Break(Option<Ident>),
    Continue(Option<Ident>),
    Return(Option<Spanned<Expr>>),
    Try(TryStmt),
    Expr(Spanned<Expr>),
    VarDecl(VarDecl),
    Empty,
    Labeled(LabeledStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub then_branch: Box<Spanned<Statement>>,
    pub else_branch: Option<Box<Spanned<Statement>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Spanned<Expr>,
    pub body: Box<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoStmt {
    pub body: Box<Spanned<Statement>>,
    pub condition: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStmt {
    pub body: Block,
    pub catches: Vec<CatchClause>,
    pub finally: Option<Block>,
}

/// `catch (IOException e) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub exception_type: Ident,
    pub name: Ident,
    pub body: Block,
}

/// A local variable declaration; `declarators` always holds at least one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: PrimitiveType,
    pub declarators: Vec<Declarator>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStmt {
    pub label: Ident,
    pub body: Box<Spanned<Statement>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Unary(UnaryOp, Box<Spanned<Expr>>),
    Literal(Literal),
    Ident(Ident),
    This,
    /// `target.name` without a call.
    Field(Box<Spanned<Expr>>, Ident),
    MethodCall {
        target: Option<Box<Spanned<Expr>>>,
        name: Ident,
        args: Vec<Spanned<Expr>>,
    },
    SuperCall {
        name: Ident,
        args: Vec<Spanned<Expr>>,
    },
    New {
        class_name: Ident,
        args: Vec<Spanned<Expr>>,
    },
    /// Only produced at statement-expression position.
    Assign {
        target: Box<Spanned<Expr>>,
        op: AssignOp,
        value: Box<Spanned<Expr>>,
    },
}

impl Expr {
    /// Return `true` for expressions that may appear on the left of `=` or next to `++`/`--`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Expr::Ident(_) | Expr::Field(_, _))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric text exactly as written, e.g. `12.5`.
    Number(String),
    /// String contents with escapes resolved.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{:?}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::OrOr => Some(BinaryOp::Or),
            OperatorId::AndAnd => Some(BinaryOp::And),
            OperatorId::EqEq => Some(BinaryOp::Eq),
            OperatorId::NotEq => Some(BinaryOp::NotEq),
            OperatorId::Lt => Some(BinaryOp::Lt),
            OperatorId::LtEq => Some(BinaryOp::LtEq),
            OperatorId::Gt => Some(BinaryOp::Gt),
            OperatorId::GtEq => Some(BinaryOp::GtEq),
            OperatorId::Plus => Some(BinaryOp::Add),
            OperatorId::Minus => Some(BinaryOp::Sub),
            OperatorId::Star => Some(BinaryOp::Mul),
            OperatorId::Slash => Some(BinaryOp::Div),
            OperatorId::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub fn operator(self) -> OperatorId {
        match self {
            BinaryOp::Or => OperatorId::OrOr,
            BinaryOp::And => OperatorId::AndAnd,
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Mod => OperatorId::Percent,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", operators::as_str(self.operator()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::PreIncrement | UnaryOp::PostIncrement => write!(f, "++"),
            UnaryOp::PreDecrement | UnaryOp::PostDecrement => write!(f, "--"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
}

impl AssignOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Assign => Some(AssignOp::Assign),
            OperatorId::PlusEq => Some(AssignOp::AddAssign),
            OperatorId::MinusEq => Some(AssignOp::SubAssign),
            OperatorId::StarEq => Some(AssignOp::MulAssign),
            OperatorId::SlashEq => Some(AssignOp::DivAssign),
            OperatorId::PercentEq => Some(AssignOp::ModAssign),
            _ => None,
        }
    }

    pub fn operator(self) -> OperatorId {
        match self {
            AssignOp::Assign => OperatorId::Assign,
            AssignOp::AddAssign => OperatorId::PlusEq,
            AssignOp::SubAssign => OperatorId::MinusEq,
            AssignOp::MulAssign => OperatorId::StarEq,
            AssignOp::DivAssign => OperatorId::SlashEq,
            AssignOp::ModAssign => OperatorId::PercentEq,
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", operators::as_str(self.operator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_mappings_are_inverse() {
        let binary = [
            BinaryOp::Or,
            BinaryOp::And,
            BinaryOp::Eq,
            BinaryOp::NotEq,
            BinaryOp::Lt,
            BinaryOp::LtEq,
            BinaryOp::Gt,
            BinaryOp::GtEq,
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Mod,
        ];
        for op in binary {
            assert_eq!(BinaryOp::from_operator(op.operator()), Some(op));
        }
        assert_eq!(BinaryOp::from_operator(OperatorId::Assign), None);
        assert_eq!(AssignOp::from_operator(OperatorId::EqEq), None);
        assert_eq!(AssignOp::from_operator(OperatorId::PercentEq), Some(AssignOp::ModAssign));
    }

    #[test]
    fn test_display() {
        assert_eq!(BinaryOp::And.to_string(), "&&");
        assert_eq!(AssignOp::AddAssign.to_string(), "+=");
        assert_eq!(PrimitiveType::Boolean.to_string(), "boolean");
        assert_eq!(Modifier::Static.to_string(), "static");
        assert_eq!(Literal::String("a\"b".into()).to_string(), r#""a\"b""#);
    }

    #[test]
    fn test_modifier_groups() {
        assert!(Modifier::Abstract.is_class_modifier());
        assert!(!Modifier::Private.is_class_modifier());
        assert!(!Modifier::Abstract.is_member_modifier());
        assert!(Modifier::Final.is_member_modifier());
    }

    #[test]
    fn test_span_merge() {
        let s = Span::new(3, 5).merge(Span::new(1, 4));
        assert_eq!(s, Span::new(1, 5));
        assert_eq!(s.len(), 4);
    }
}
