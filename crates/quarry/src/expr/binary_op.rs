use quarry_core::query::{Conjunction, Operation};

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    And,
    Or,
}

impl BinaryOp {
    /// True for `&&` and `||`.
    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// The comparison the operator performs. `None` for the logical
    /// connectives.
    pub fn operation(self) -> Option<Operation> {
        Some(match self {
            Self::Eq => Operation::Equal,
            Self::Ne => Operation::NotEqual,
            Self::Gt => Operation::GreaterThan,
            Self::Ge => Operation::GreaterThanOrEqual,
            Self::Lt => Operation::LessThan,
            Self::Le => Operation::LessThanOrEqual,
            Self::And | Self::Or => return None,
        })
    }

    /// The conjunction the operator joins groups with. `None` for comparisons.
    pub fn conjunction(self) -> Option<Conjunction> {
        match self {
            Self::And => Some(Conjunction::And),
            Self::Or => Some(Conjunction::Or),
            _ => None,
        }
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => "==".fmt(f),
            Self::Ne => "!=".fmt(f),
            Self::Gt => ">".fmt(f),
            Self::Ge => ">=".fmt(f),
            Self::Lt => "<".fmt(f),
            Self::Le => "<=".fmt(f),
            Self::And => "&&".fmt(f),
            Self::Or => "||".fmt(f),
        }
    }
}
