use super::{DbField, EntityMeta};
use crate::query::Field;

use indexmap::IndexMap;

/// The ordered columns of one table.
///
/// Lookups by name are case-insensitive and ignore identifier quoting. The
/// identity column and the primary key columns are derived once at
/// construction; a composite primary key yields several primary columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DbFieldCollection {
    /// Keyed by the lower-cased, unquoted column name
    fields: IndexMap<String, DbField>,

    identity: Option<usize>,

    primaries: Vec<usize>,
}

impl DbFieldCollection {
    pub fn new(fields: impl IntoIterator<Item = DbField>) -> DbFieldCollection {
        let fields: IndexMap<_, _> = fields
            .into_iter()
            .map(|field| (lookup_key(&field.name), field))
            .collect();

        let identity = fields.values().position(|field| field.is_identity);
        let primaries = fields
            .values()
            .enumerate()
            .filter(|(_, field)| field.is_primary)
            .map(|(index, _)| index)
            .collect();

        DbFieldCollection {
            fields,
            identity,
            primaries,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DbField> + '_ {
        self.fields.values()
    }

    /// Case-insensitive lookup; quotes around `name` are ignored.
    pub fn get(&self, name: &str) -> Option<&DbField> {
        self.fields.get(&lookup_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The identity column, if the table has one.
    pub fn identity(&self) -> Option<&DbField> {
        self.identity.map(|index| &self.fields[index])
    }

    /// The primary key columns, in table order.
    pub fn primaries(&self) -> impl ExactSizeIterator<Item = &DbField> + '_ {
        self.primaries.iter().map(|index| &self.fields[*index])
    }

    /// The first primary key column.
    pub fn primary(&self) -> Option<&DbField> {
        self.primaries().next()
    }

    /// All columns as a projection.
    pub fn as_fields(&self) -> Vec<Field> {
        self.iter().map(DbField::as_field).collect()
    }

    /// Applies the entity's declared key markers.
    ///
    /// Markers declared on the entity are authoritative: when the entity
    /// declares any primary property, the catalog's primary flags are replaced
    /// by the declared ones, and likewise for identity. Catalog flags are kept
    /// only where the entity declares nothing.
    pub fn with_entity_keys(self, entity: &EntityMeta) -> DbFieldCollection {
        let declares_primary = entity.properties.iter().any(|p| p.primary);
        let declares_identity = entity.properties.iter().any(|p| p.identity);

        if !declares_primary && !declares_identity {
            return self;
        }

        let fields = self.fields.into_values().map(|mut field| {
            let property = entity.property_by_column(&field.name);

            if declares_primary {
                field.is_primary = property.is_some_and(|p| p.primary);
            }

            if declares_identity {
                field.is_identity = property.is_some_and(|p| p.identity);
            }

            field
        });

        DbFieldCollection::new(fields)
    }
}

fn lookup_key(name: &str) -> String {
    crate::query::field::unquote(name).to_lowercase()
}

impl<'a> IntoIterator for &'a DbFieldCollection {
    type Item = &'a DbField;
    type IntoIter = indexmap::map::Values<'a, String, DbField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}
