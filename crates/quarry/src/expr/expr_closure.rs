use super::Expr;

/// A single-parameter closure. The body refers to the parameter through
/// [`Expr::Var`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExprClosure {
    pub param: String,
    pub body: Box<Expr>,
}

impl ExprClosure {
    pub fn new(param: impl Into<String>, body: impl Into<Expr>) -> Self {
        ExprClosure {
            param: param.into(),
            body: Box::new(body.into()),
        }
    }
}

impl Expr {
    pub fn closure(param: impl Into<String>, body: impl Into<Self>) -> Self {
        ExprClosure::new(param, body).into()
    }
}

impl From<ExprClosure> for Expr {
    fn from(value: ExprClosure) -> Self {
        Self::Closure(value)
    }
}
