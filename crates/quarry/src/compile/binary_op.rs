use super::{unsupported, Compiler};
use crate::expr::{BinaryOp, Expr, ExprBinaryOp, ExprUnaryOp, Method, UnaryOp};

use quarry_core::{
    query::{Operation, QueryGroup},
    Error, Result,
};

impl Compiler<'_> {
    pub(super) fn binary_op(&mut self, expr: &ExprBinaryOp) -> Result<QueryGroup> {
        let Some(operation) = expr.op.operation() else {
            // `&&` / `||`
            let lhs = self.predicate(&expr.lhs)?;
            let rhs = self.predicate(&expr.rhs)?;

            return Ok(match expr.op {
                BinaryOp::Or => QueryGroup::or([lhs, rhs]),
                _ => QueryGroup::and([lhs, rhs]),
            });
        };

        if let Some(group) = self.fold(expr)? {
            return Ok(group);
        }

        if !is_direct(expr) {
            return Err(unsupported(&Expr::BinaryOp(expr.clone())));
        }

        self.comparison(expr, operation)
    }

    /// `P == true`, `P != false`, `P == false` and `P != true` where `P` is
    /// itself a predicate.
    fn fold(&mut self, expr: &ExprBinaryOp) -> Result<Option<QueryGroup>> {
        if !matches!(expr.op, BinaryOp::Eq | BinaryOp::Ne) {
            return Ok(None);
        }

        let (predicate, constant) = match (expr.lhs.as_bool(), expr.rhs.as_bool()) {
            (None, Some(constant)) if is_predicate(&expr.lhs) => (&*expr.lhs, constant),
            (Some(constant), None) if is_predicate(&expr.rhs) => (&*expr.rhs, constant),
            _ => return Ok(None),
        };

        let mut group = self.predicate(predicate)?;

        if constant == (expr.op == BinaryOp::Ne) {
            group.is_not = !group.is_not;
        }

        Ok(Some(group))
    }

    /// A comparison between one field and a constant.
    fn comparison(&mut self, expr: &ExprBinaryOp, operation: Operation) -> Result<QueryGroup> {
        let (property, operation, value) = match (self.field(&expr.lhs)?, self.field(&expr.rhs)?) {
            (Some(property), None) => (property, operation, self.eval(&expr.rhs)?),
            // `5 < x.Age` is `x.Age > 5`
            (None, Some(property)) => (property, operation.mirror(), self.eval(&expr.lhs)?),
            (Some(lhs), Some(rhs)) => {
                return Err(Error::unsupported_expression(format!(
                    "comparing field `{}` to field `{}`",
                    lhs.name, rhs.name
                )))
            }
            (None, None) => {
                return Err(Error::unsupported_expression(format!(
                    "comparison without a field: {expr:?}"
                )))
            }
        };

        if value.is_list() {
            return Err(Error::unsupported_expression(format!(
                "`{}` cannot be compared to a list with `{operation}`; use `Contains`",
                property.name
            )));
        }

        Ok(self.emit(property, operation, value))
    }
}

/// A comparison whose left side is a field or a constant and whose right side
/// is a field or something evaluating to a constant.
fn is_direct(expr: &ExprBinaryOp) -> bool {
    let lhs = matches!(
        *expr.lhs,
        Expr::Value(_) | Expr::Field(_) | Expr::Var(_) | Expr::UnaryOp(ExprUnaryOp { op: UnaryOp::Convert(_), .. })
    );

    let rhs = matches!(
        *expr.rhs,
        Expr::Call(_)
            | Expr::Conditional(_)
            | Expr::Value(_)
            | Expr::Field(_)
            | Expr::Array(_)
            | Expr::Var(_)
            | Expr::UnaryOp(ExprUnaryOp { op: UnaryOp::Convert(_), .. })
    );

    lhs && rhs
}

/// True for expressions that compile to a group of their own.
fn is_predicate(expr: &Expr) -> bool {
    match expr {
        Expr::BinaryOp(_) => true,
        Expr::UnaryOp(ExprUnaryOp { op, .. }) => *op == UnaryOp::Not,
        Expr::Call(call) => matches!(
            call.method,
            Method::Contains | Method::StartsWith | Method::EndsWith | Method::Any | Method::All
        ),
        _ => false,
    }
}
