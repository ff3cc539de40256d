use super::Expr;

/// `test ? then : otherwise`. Only evaluated on the value side, where the
/// test must reduce to a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprConditional {
    pub test: Box<Expr>,
    pub then: Box<Expr>,
    pub otherwise: Box<Expr>,
}

impl Expr {
    pub fn conditional(
        test: impl Into<Self>,
        then: impl Into<Self>,
        otherwise: impl Into<Self>,
    ) -> Self {
        ExprConditional {
            test: Box::new(test.into()),
            then: Box::new(then.into()),
            otherwise: Box::new(otherwise.into()),
        }
        .into()
    }
}

impl From<ExprConditional> for Expr {
    fn from(value: ExprConditional) -> Self {
        Self::Conditional(value)
    }
}
