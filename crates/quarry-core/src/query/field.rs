use super::Type;

use std::hash::{Hash, Hasher};

/// A column reference by name, with an optional declared host type.
///
/// Two fields are equal when their names are equal; the type is a hint only.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: Option<Type>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            ty: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: Type) -> Field {
        Field {
            name: name.into(),
            ty: Some(ty),
        }
    }

    /// Builds a projection from a list of names.
    pub fn parse<I>(names: I) -> Vec<Field>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        names.into_iter().map(Field::new).collect()
    }

    /// The name with any identifier quotes removed.
    pub fn unquoted_name(&self) -> &str {
        unquote(&self.name)
    }

    /// The name placeholders bound to this column use.
    pub fn parameter_name(&self) -> String {
        super::parameter::sanitize(&self.name)
    }

    /// True when `name` refers to this column, ignoring case and quoting.
    pub fn is_column(&self, name: &str) -> bool {
        self.unquoted_name().eq_ignore_ascii_case(unquote(name))
    }
}

/// Strips one layer of `[...]`, `"..."` or `` `...` `` quoting.
pub(crate) fn unquote(name: &str) -> &str {
    let name = name.trim();
    let quoted = [('[', ']'), ('"', '"'), ('`', '`')]
        .into_iter()
        .find(|(open, close)| name.len() >= 2 && name.starts_with(*open) && name.ends_with(*close));

    match quoted {
        Some(_) => &name[1..name.len() - 1],
        None => name,
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Field) -> bool {
        self.name == other.name
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Field {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Field {
        Field::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_strips_one_layer() {
        assert_eq!(unquote("[Name]"), "Name");
        assert_eq!(unquote("\"Name\""), "Name");
        assert_eq!(unquote("`Name`"), "Name");
        assert_eq!(unquote("Name"), "Name");
        assert_eq!(unquote("["), "[");
    }

    #[test]
    fn equality_ignores_type() {
        assert_eq!(Field::new("Id"), Field::typed("Id", Type::I64));
        assert_ne!(Field::new("Id"), Field::new("id"));
    }
}
