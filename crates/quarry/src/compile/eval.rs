use super::{unsupported, Compiler};
use crate::expr::{Expr, ExprUnaryOp, Method, UnaryOp};

use quarry_core::{
    query::{Type, Value},
    Error, Result,
};

impl Compiler<'_> {
    /// Evaluates the value side of a comparison to a constant.
    pub(super) fn eval(&self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Value(value) => Ok(value.clone()),
            Expr::Var(name) => self
                .scope
                .iter()
                .rev()
                .find(|(param, _)| param == name)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| {
                    Error::unsupported_expression(format!("`{name}` is not a closure parameter"))
                }),
            Expr::Array(items) => items
                .iter()
                .map(|item| self.eval(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            Expr::UnaryOp(ExprUnaryOp {
                op: UnaryOp::Convert(ty),
                operand,
            }) => convert(self.eval(operand)?, *ty),
            Expr::UnaryOp(ExprUnaryOp {
                op: UnaryOp::Not,
                operand,
            }) => match self.eval(operand)? {
                Value::Bool(value) => Ok(Value::Bool(!value)),
                value => Err(Error::unsupported_expression(format!(
                    "cannot negate {value:?}"
                ))),
            },
            Expr::Conditional(expr) => match self.eval(&expr.test)? {
                Value::Bool(true) => self.eval(&expr.then),
                Value::Bool(false) => self.eval(&expr.otherwise),
                value => Err(Error::unsupported_expression(format!(
                    "conditional test must be a boolean constant; found {value:?}"
                ))),
            },
            Expr::Call(call) if call.args.is_empty() => {
                string_method(call.method, self.eval(&call.target)?)
            }
            _ => Err(unsupported(expr)),
        }
    }
}

fn string_method(method: Method, value: Value) -> Result<Value> {
    let text = match value {
        Value::Null => return Ok(Value::Null),
        Value::String(text) => text,
        value => {
            return Err(Error::unsupported_expression(format!(
                "`{}` expects a string; found {value:?}",
                method.name()
            )))
        }
    };

    let text = match method {
        Method::ToLower => text.to_lowercase(),
        Method::ToUpper => text.to_uppercase(),
        Method::Trim => text.trim().to_string(),
        _ => {
            return Err(Error::unsupported_expression(format!(
                "`{}` cannot be evaluated on a constant",
                method.name()
            )))
        }
    };

    Ok(Value::String(text))
}

/// Converts a constant to `ty`. `NULL` converts to anything.
fn convert(value: Value, ty: Type) -> Result<Value> {
    if value.is_null() || ty.is_unknown() || value.ty() == ty {
        return Ok(value);
    }

    let converted = match ty {
        Type::I16 | Type::I32 | Type::I64 => {
            let Some(int) = integer(&value) else {
                return Err(cannot_convert(&value, ty));
            };

            match ty {
                Type::I16 => Value::I16(
                    i16::try_from(int).map_err(|_| cannot_convert(&value, ty))?,
                ),
                Type::I32 => Value::I32(
                    i32::try_from(int).map_err(|_| cannot_convert(&value, ty))?,
                ),
                _ => Value::I64(int),
            }
        }
        Type::F32 | Type::F64 | Type::Decimal => match value {
            Value::F64(_) => value,
            _ => match integer(&value) {
                Some(int) => Value::F64(int as f64),
                None => return Err(cannot_convert(&value, ty)),
            },
        },
        Type::String => match value {
            Value::Enum(variant) => Value::String(variant.name),
            Value::Bool(value) => Value::String(value.to_string()),
            Value::F64(value) => Value::String(value.to_string()),
            Value::Uuid(value) => Value::String(value.to_string()),
            value => match value.as_i64() {
                Some(int) => Value::String(int.to_string()),
                None => return Err(cannot_convert(&value, ty)),
            },
        },
        _ => return Err(cannot_convert(&value, ty)),
    };

    Ok(converted)
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Enum(variant) => Some(variant.discriminant),
        Value::F64(value) => Some(value.trunc() as i64),
        Value::Bool(value) => Some(i64::from(*value)),
        value => value.as_i64(),
    }
}

fn cannot_convert(value: &Value, ty: Type) -> Error {
    Error::unsupported_expression(format!("cannot convert {value:?} to {ty:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_between_integers() {
        assert_eq!(convert(Value::I32(7), Type::I64).unwrap(), Value::I64(7));
        assert_eq!(convert(Value::I64(7), Type::I16).unwrap(), Value::I16(7));

        let err = convert(Value::I64(i64::MAX), Type::I32).unwrap_err();
        assert!(err.is_unsupported_expression());

        let err = convert(Value::I32(40_000), Type::I16).unwrap_err();
        assert!(err.is_unsupported_expression());
    }

    #[test]
    fn convert_enum() {
        let value = Value::enumeration("High", 2);

        assert_eq!(convert(value.clone(), Type::I32).unwrap(), Value::I32(2));
        assert_eq!(
            convert(value, Type::String).unwrap(),
            Value::String("High".to_string())
        );
    }

    #[test]
    fn convert_keeps_null() {
        assert_eq!(convert(Value::Null, Type::I32).unwrap(), Value::Null);
    }

    #[test]
    fn convert_rejects_strings_to_numbers() {
        let err = convert(Value::from("12"), Type::I32).unwrap_err();
        assert!(err.is_unsupported_expression());
    }
}
