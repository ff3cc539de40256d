use super::{Type, Value};

/// A named value bound to a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Name without the dialect's prefix character.
    pub name: String,

    pub value: Value,

    /// Overrides the type inferred from the value.
    pub ty: Option<Type>,
}

/// Direction of a parameter for stored-procedure-style execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterDirection {
    Input,
    Output,
    InputOutput,
    ReturnValue,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Parameter {
        Parameter {
            name: name.into(),
            value: value.into(),
            ty: None,
        }
    }

    /// The type of the bound value, preferring the explicit override.
    pub fn ty(&self) -> Type {
        self.ty.unwrap_or_else(|| self.value.ty())
    }
}

/// Turns a column name into a name usable after a parameter prefix.
///
/// Quotes are removed and every character that is not alphanumeric or `_`
/// becomes `_`.
pub(crate) fn sanitize(name: &str) -> String {
    super::field::unquote(name)
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_names() {
        assert_eq!(sanitize("Name"), "Name");
        assert_eq!(sanitize("[First Name]"), "First_Name");
        assert_eq!(sanitize("Order-Date"), "Order_Date");
    }
}
