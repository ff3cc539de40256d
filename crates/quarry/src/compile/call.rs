use super::{unsupported, Compiler};
use crate::expr::{Expr, ExprCall, Method};

use quarry_core::{
    query::{Operation, QueryGroup, Value},
    Error, Result,
};

impl Compiler<'_> {
    /// Compiles a method call used as a predicate. `negate` is set when the
    /// call appears under `!`.
    pub(super) fn call(&mut self, call: &ExprCall, negate: bool) -> Result<QueryGroup> {
        match call.method {
            Method::Contains | Method::StartsWith | Method::EndsWith => self.matches(call, negate),
            Method::Any | Method::All => self.quantifier(call, negate),
            Method::ToLower | Method::ToUpper | Method::Trim => {
                Err(unsupported(&Expr::Call(call.clone())))
            }
        }
    }

    /// `x.Name.Contains("a")` becomes `LIKE`, `ids.Contains(x.Id)` becomes
    /// `IN`.
    fn matches(&mut self, call: &ExprCall, negate: bool) -> Result<QueryGroup> {
        let [arg] = &call.args[..] else {
            return Err(Error::unsupported_expression(format!(
                "`{}` takes exactly one argument",
                call.method.name()
            )));
        };

        if let Some(property) = self.field(&call.target)? {
            let text = match self.eval(arg)? {
                Value::String(text) => text,
                value => {
                    return Err(Error::unsupported_expression(format!(
                        "`{}` on `{}` expects a string; found {value:?}",
                        call.method.name(),
                        property.name
                    )))
                }
            };

            let Some(pattern) = call.method.like_pattern(&text) else {
                return Err(unsupported(&Expr::Call(call.clone())));
            };

            let operation = if negate {
                Operation::NotLike
            } else {
                Operation::Like
            };

            return Ok(self.emit(property, operation, Value::String(pattern)));
        }

        if call.method == Method::Contains {
            if let Some(property) = self.field(arg)? {
                let list = self.eval(&call.target)?;

                if !list.is_list() {
                    return Err(Error::unsupported_expression(format!(
                        "`Contains` on `{}` expects a list; found {list:?}",
                        property.name
                    )));
                }

                let operation = if negate {
                    Operation::NotIn
                } else {
                    Operation::In
                };

                return Ok(self.emit(property, operation, list));
            }
        }

        Err(unsupported(&Expr::Call(call.clone())))
    }

    /// `list.Any(|v| ...)` and `list.All(|v| ...)`: the body is compiled once
    /// per element with the parameter bound to it.
    fn quantifier(&mut self, call: &ExprCall, negate: bool) -> Result<QueryGroup> {
        let [Expr::Closure(closure)] = &call.args[..] else {
            return Err(Error::unsupported_expression(format!(
                "`{}` takes a single closure",
                call.method.name()
            )));
        };

        let items = match self.eval(&call.target)? {
            Value::List(items) if !items.is_empty() => items,
            Value::List(_) => {
                return Err(Error::unsupported_expression(format!(
                    "`{}` over an empty list",
                    call.method.name()
                )))
            }
            value => {
                return Err(Error::unsupported_expression(format!(
                    "`{}` expects a list; found {value:?}",
                    call.method.name()
                )))
            }
        };

        let mut children = Vec::with_capacity(items.len());

        for item in items {
            self.scope.push((closure.param.clone(), item));
            let child = self.predicate(&closure.body);
            self.scope.pop();

            children.push(child?);
        }

        let mut group = match call.method {
            Method::Any => QueryGroup::or(children),
            _ => QueryGroup::and(children),
        };
        group.is_not = negate;

        Ok(group)
    }
}
