use super::{Expr, UnaryOp};

use quarry_core::query::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnaryOp {
    pub op: UnaryOp,

    /// The expression the operator applies to.
    pub operand: Box<Expr>,
}

impl Expr {
    /// Creates a `Not` expression that negates the given expression.
    pub fn not(operand: impl Into<Self>) -> Self {
        ExprUnaryOp {
            op: UnaryOp::Not,
            operand: Box::new(operand.into()),
        }
        .into()
    }

    pub fn convert(operand: impl Into<Self>, ty: Type) -> Self {
        ExprUnaryOp {
            op: UnaryOp::Convert(ty),
            operand: Box::new(operand.into()),
        }
        .into()
    }

    /// Returns true if this is a `Not` expression.
    pub fn is_not(&self) -> bool {
        matches!(
            self,
            Self::UnaryOp(ExprUnaryOp {
                op: UnaryOp::Not,
                ..
            })
        )
    }
}

impl From<ExprUnaryOp> for Expr {
    fn from(value: ExprUnaryOp) -> Self {
        Self::UnaryOp(value)
    }
}
