use super::{parameter::sanitize, Field, Operation, Parameter, ParameterDirection, Type, Value};
use crate::{Error, Result};

use std::hash::{Hash, Hasher};

/// The atomic unit of a compiled predicate: `field <operation> value`.
///
/// Equality and hashing only consider the field name, the operation, the
/// direction and the size. The bound value is not part of the identity, so
/// `Name = 'a'` and `Name = 'b'` are the same field for duplicate detection.
#[derive(Debug, Clone)]
pub struct QueryField {
    pub field: Field,
    pub operation: Operation,
    pub parameter: Parameter,

    /// Set for stored-procedure-style fields.
    pub direction: Option<ParameterDirection>,

    /// Size of a directional parameter.
    pub size: Option<usize>,
}

impl QueryField {
    pub fn new(name: impl Into<String>, operation: Operation, value: impl Into<Value>) -> QueryField {
        let field = Field::new(name);
        let parameter = Parameter::new(sanitize(&field.name), value);

        QueryField {
            field,
            operation,
            parameter,
            direction: None,
            size: None,
        }
    }

    pub fn equal(name: impl Into<String>, value: impl Into<Value>) -> QueryField {
        QueryField::new(name, Operation::Equal, value)
    }

    pub fn is_null(name: impl Into<String>) -> QueryField {
        QueryField::new(name, Operation::Equal, Value::Null)
    }

    pub fn is_not_null(name: impl Into<String>) -> QueryField {
        QueryField::new(name, Operation::NotEqual, Value::Null)
    }

    pub fn directional(
        name: impl Into<String>,
        direction: ParameterDirection,
        size: Option<usize>,
        value: impl Into<Value>,
    ) -> QueryField {
        QueryField {
            direction: Some(direction),
            size,
            ..QueryField::equal(name, value)
        }
    }

    pub fn with_type(mut self, ty: Type) -> QueryField {
        self.field.ty = Some(ty);
        self.parameter.ty = Some(ty);
        self
    }

    pub fn name(&self) -> &str {
        &self.field.name
    }

    pub fn value(&self) -> &Value {
        &self.parameter.value
    }

    /// True when the field renders as `IS NULL` or `IS NOT NULL`.
    pub fn is_null_check(&self) -> bool {
        self.parameter.value.is_null()
            && matches!(self.operation, Operation::Equal | Operation::NotEqual)
    }

    /// The parameters this field binds, in placeholder order.
    ///
    /// `BETWEEN` binds `<name>_Left` and `<name>_Right`, `IN` binds
    /// `<name>_In_<i>` per element, null checks bind nothing.
    pub fn bindings(&self) -> Result<Vec<Parameter>> {
        if self.is_null_check() {
            return Ok(vec![]);
        }

        let name = &self.parameter.name;
        let binding = |name: String, value: &Value| Parameter {
            name,
            value: value.clone(),
            ty: self.parameter.ty,
        };

        if self.operation.is_range() {
            let [left, right] = self.list_value()? else {
                return Err(Error::invalid_configuration(format!(
                    "`{}` on field `{}` requires exactly two values",
                    self.operation,
                    self.name()
                )));
            };

            return Ok(vec![
                binding(format!("{name}_Left"), left),
                binding(format!("{name}_Right"), right),
            ]);
        }

        if self.operation.is_list() {
            return Ok(self
                .list_value()?
                .iter()
                .enumerate()
                .map(|(i, value)| binding(format!("{name}_In_{i}"), value))
                .collect());
        }

        Ok(vec![binding(name.clone(), &self.parameter.value)])
    }

    fn list_value(&self) -> Result<&[Value]> {
        self.parameter.value.as_list().ok_or_else(|| {
            Error::invalid_configuration(format!(
                "`{}` on field `{}` requires a list value",
                self.operation,
                self.name()
            ))
        })
    }
}

impl PartialEq for QueryField {
    fn eq(&self, other: &QueryField) -> bool {
        self.field.name == other.field.name
            && self.operation == other.operation
            && self.direction == other.direction
            && self.size == other.size
    }
}

impl Eq for QueryField {}

impl Hash for QueryField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.name.hash(state);
        self.operation.hash(state);
        self.direction.hash(state);
        self.size.hash(state);
    }
}
