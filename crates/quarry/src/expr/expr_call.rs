use super::{Expr, ExprClosure, Method};

/// A method call.
///
/// # Examples
///
/// ```text
/// x.Name.Contains("a")     // call(Contains, field(Name), ["a"])
/// ids.Contains(x.Id)       // call(Contains, array(ids), [field(Id)])
/// ids.Any(v => x.Id == v)  // call(Any, array(ids), [closure(v, ...)])
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub method: Method,

    /// The receiver of the call.
    pub target: Box<Expr>,

    pub args: Vec<Expr>,
}

impl Expr {
    pub fn call(method: Method, target: impl Into<Self>, args: impl IntoIterator<Item = Expr>) -> Self {
        ExprCall {
            method,
            target: Box::new(target.into()),
            args: args.into_iter().collect(),
        }
        .into()
    }

    pub fn contains(target: impl Into<Self>, arg: impl Into<Self>) -> Self {
        Expr::call(Method::Contains, target, [arg.into()])
    }

    pub fn starts_with(target: impl Into<Self>, arg: impl Into<Self>) -> Self {
        Expr::call(Method::StartsWith, target, [arg.into()])
    }

    pub fn ends_with(target: impl Into<Self>, arg: impl Into<Self>) -> Self {
        Expr::call(Method::EndsWith, target, [arg.into()])
    }

    pub fn any(target: impl Into<Self>, closure: ExprClosure) -> Self {
        Expr::call(Method::Any, target, [closure.into()])
    }

    pub fn all(target: impl Into<Self>, closure: ExprClosure) -> Self {
        Expr::call(Method::All, target, [closure.into()])
    }

    pub fn to_lower(target: impl Into<Self>) -> Self {
        Expr::call(Method::ToLower, target, [])
    }

    pub fn to_upper(target: impl Into<Self>) -> Self {
        Expr::call(Method::ToUpper, target, [])
    }

    pub fn trim(target: impl Into<Self>) -> Self {
        Expr::call(Method::Trim, target, [])
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
