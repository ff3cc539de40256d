//! The predicate expression tree handed to the [compiler](crate::compile).
//!
//! Expressions are built with the constructors on [`Expr`]:
//!
//! ```
//! use quarry::expr::Expr;
//!
//! // x => x.Age >= 18 && x.Name.StartsWith("A")
//! let expr = Expr::and(
//!     Expr::ge(Expr::field("Age"), 18),
//!     Expr::starts_with(Expr::field("Name"), "A"),
//! );
//! # let _ = expr;
//! ```

mod binary_op;
pub use binary_op::BinaryOp;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_call;
pub use expr_call::ExprCall;

mod expr_closure;
pub use expr_closure::ExprClosure;

mod expr_conditional;
pub use expr_conditional::ExprConditional;

mod expr_unary_op;
pub use expr_unary_op::ExprUnaryOp;

mod method;
pub use method::Method;

mod unary_op;
pub use unary_op::UnaryOp;

use quarry_core::query::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A property of the entity the predicate is written against
    Field(String),

    /// A constant
    Value(Value),

    /// A reference to the parameter of an enclosing closure
    Var(String),

    /// Comparison or logical connective
    BinaryOp(ExprBinaryOp),

    /// Negation or conversion
    UnaryOp(ExprUnaryOp),

    /// A method call on a field or a constant
    Call(ExprCall),

    /// `test ? then : otherwise`
    Conditional(ExprConditional),

    /// A list of expressions, evaluated to a list value
    Array(Vec<Expr>),

    /// `|param| body`, the argument of `Any` and `All`
    Closure(ExprClosure),
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn array(items: impl IntoIterator<Item = impl Into<Self>>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the constant if the expression is a boolean literal.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Value(value) => value.as_bool(),
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_from_value {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

impl_from_value!(bool, i16, i32, i64, f64, String, &str, uuid::Uuid);
