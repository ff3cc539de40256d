use crate::{
    driver::Dialect,
    query::{Field, Type},
};

/// Column metadata resolved from a database catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DbField {
    /// The name of the column in the database.
    pub name: String,

    /// True if the column is part of the table's primary key.
    pub is_primary: bool,

    /// True if the database generates the column's value on insert.
    pub is_identity: bool,

    pub is_nullable: bool,

    /// The host type the native type resolves to.
    pub ty: Type,

    /// Character or byte length, when the type has one.
    pub size: Option<u32>,

    pub precision: Option<u8>,

    pub scale: Option<u8>,

    /// The type name as reported by the catalog.
    pub native_type: String,

    pub has_default_value: bool,

    pub is_computed: bool,

    /// Dialect of the catalog the column was read from.
    pub provider: Dialect,
}

impl DbField {
    /// A nullable, non-key column with no size information.
    pub fn new(name: impl Into<String>, ty: Type, provider: Dialect) -> DbField {
        DbField {
            name: name.into(),
            is_primary: false,
            is_identity: false,
            is_nullable: true,
            ty,
            size: None,
            precision: None,
            scale: None,
            native_type: String::new(),
            has_default_value: false,
            is_computed: false,
            provider,
        }
    }

    pub fn unquoted_name(&self) -> &str {
        crate::query::field::unquote(&self.name)
    }

    /// The column as a projection field carrying its resolved type.
    pub fn as_field(&self) -> Field {
        Field::typed(&*self.name, self.ty)
    }
}
