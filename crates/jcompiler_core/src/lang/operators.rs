//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with its metadata: precedence tier, fixity and whether the
//! operator assigns.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - Precedence numbers only need to be consistent relative to each other; higher binds tighter.
//! - `||` and `&&` share a tier: the grammar treats them as one logical level.
//!
//! ## Examples
//! ```rust
//! use jcompiler_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

/// Define whether an operator is infix (binary) or prefix.
///
/// `++` and `--` are recorded as prefix; the parser also accepts them after an assignable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Increment / decrement
    PlusPlus,
    MinusMinus,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,

    // Assignment
    Assign,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `+` and `-` are also valid prefix operators; the registry records their infix role.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub fixity: Fixity,
    pub is_assignment: bool,
}

/// Precedence tiers, lowest to highest.
pub mod tier {
    pub const ASSIGNMENT: u8 = 10;
    pub const LOGICAL: u8 = 20;
    pub const RELATIONAL: u8 = 30;
    pub const ADDITIVE: u8 = 40;
    pub const MULTIPLICATIVE: u8 = 50;
    pub const UNARY: u8 = 60;
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", tier::ADDITIVE, Fixity::Infix),
    op(OperatorId::Minus, "-", tier::ADDITIVE, Fixity::Infix),
    op(OperatorId::Star, "*", tier::MULTIPLICATIVE, Fixity::Infix),
    op(OperatorId::Slash, "/", tier::MULTIPLICATIVE, Fixity::Infix),
    op(OperatorId::Percent, "%", tier::MULTIPLICATIVE, Fixity::Infix),
    // Increment / decrement
    op(OperatorId::PlusPlus, "++", tier::UNARY, Fixity::Prefix),
    op(OperatorId::MinusMinus, "--", tier::UNARY, Fixity::Prefix),
    // Comparison
    op(OperatorId::EqEq, "==", tier::RELATIONAL, Fixity::Infix),
    op(OperatorId::NotEq, "!=", tier::RELATIONAL, Fixity::Infix),
    op(OperatorId::Lt, "<", tier::RELATIONAL, Fixity::Infix),
    op(OperatorId::LtEq, "<=", tier::RELATIONAL, Fixity::Infix),
    op(OperatorId::Gt, ">", tier::RELATIONAL, Fixity::Infix),
    op(OperatorId::GtEq, ">=", tier::RELATIONAL, Fixity::Infix),
    // Logical
    op(OperatorId::AndAnd, "&&", tier::LOGICAL, Fixity::Infix),
    op(OperatorId::OrOr, "||", tier::LOGICAL, Fixity::Infix),
    // Assignment
    assign(OperatorId::Assign, "="),
    assign(OperatorId::PlusEq, "+="),
    assign(OperatorId::MinusEq, "-="),
    assign(OperatorId::StarEq, "*="),
    assign(OperatorId::SlashEq, "/="),
    assign(OperatorId::PercentEq, "%="),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return `true` for `=` and the compound assignment operators.
pub fn is_assignment(id: OperatorId) -> bool {
    info_for(id).is_assignment
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        fixity,
        is_assignment: false,
    }
}

const fn assign(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence: tier::ASSIGNMENT,
        fixity: Fixity::Infix,
        is_assignment: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_round_trips() {
        for o in OPERATORS {
            assert_eq!(from_str(o.spelling), Some(o.id));
            assert_eq!(as_str(o.id), o.spelling);
        }
    }

    #[test]
    fn test_logical_operators_share_a_tier() {
        assert_eq!(
            info_for(OperatorId::AndAnd).precedence,
            info_for(OperatorId::OrOr).precedence
        );
    }

    #[test]
    fn test_tier_ordering() {
        let p = |id| info_for(id).precedence;
        assert!(p(OperatorId::Assign) < p(OperatorId::OrOr));
        assert!(p(OperatorId::OrOr) < p(OperatorId::EqEq));
        assert!(p(OperatorId::EqEq) < p(OperatorId::Plus));
        assert!(p(OperatorId::Plus) < p(OperatorId::Percent));
    }

    #[test]
    fn test_assignment_flags() {
        assert!(is_assignment(OperatorId::Assign));
        assert!(is_assignment(OperatorId::PercentEq));
        assert!(!is_assignment(OperatorId::EqEq));
        assert!(!is_assignment(OperatorId::PlusPlus));
    }
}
