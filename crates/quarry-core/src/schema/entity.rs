use crate::query::{Field, Type};

/// Types whose metadata can be described to Quarry.
///
/// The description is produced once per type and cached by the caller; the
/// compiler and the statement builder only ever see the resulting
/// [`EntityMeta`].
pub trait Entity: 'static {
    fn describe() -> EntityMeta;
}

/// The resolved mapping of an entity type onto a table.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMeta {
    /// Name of the entity type.
    pub name: String,

    /// Table the entity maps to, possibly schema-qualified.
    pub table: String,

    pub properties: Vec<Property>,
}

/// One mapped property of an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name as used in predicates.
    pub name: String,

    /// Mapped column name.
    pub column: String,

    pub ty: Type,

    /// True for optional properties.
    pub nullable: bool,

    /// Declared as part of the primary key.
    pub primary: bool,

    /// Declared as generated by the database.
    pub identity: bool,
}

impl EntityMeta {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> EntityMeta {
        EntityMeta {
            name: name.into(),
            table: table.into(),
            properties: vec![],
        }
    }

    pub fn property(mut self, property: Property) -> EntityMeta {
        self.properties.push(property);
        self
    }

    /// Finds a property by its name. Falls back to a case-insensitive match.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.properties.iter().find(|p| p.name.eq_ignore_ascii_case(name)))
    }

    /// Finds a property by its mapped column, ignoring case.
    pub fn property_by_column(&self, column: &str) -> Option<&Property> {
        let column = crate::query::field::unquote(column);
        self.properties
            .iter()
            .find(|p| p.column.eq_ignore_ascii_case(column))
    }

    /// All mapped columns as a projection.
    pub fn fields(&self) -> Vec<Field> {
        self.properties
            .iter()
            .map(|p| Field::typed(&*p.column, p.ty))
            .collect()
    }
}

impl Property {
    /// A non-nullable property mapped to a column of the same name.
    pub fn new(name: impl Into<String>, ty: Type) -> Property {
        let name = name.into();

        Property {
            column: name.clone(),
            name,
            ty,
            nullable: false,
            primary: false,
            identity: false,
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> Property {
        self.column = column.into();
        self
    }

    pub fn nullable(mut self) -> Property {
        self.nullable = true;
        self
    }

    pub fn primary(mut self) -> Property {
        self.primary = true;
        self
    }

    pub fn identity(mut self) -> Property {
        self.identity = true;
        self
    }
}
