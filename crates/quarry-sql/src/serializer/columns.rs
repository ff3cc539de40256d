//! Column roles of a statement's table, read from its resolved columns.

use quarry_core::{
    query::Field,
    schema::{DbField, DbFieldCollection},
};

/// The column whose value identifies a written row.
#[derive(Debug, Clone, Copy)]
pub(super) enum ReturnedKey<'a> {
    /// Generated by the database.
    Identity(&'a str),

    /// Supplied by the caller.
    Supplied(&'a str),

    None,
}

fn resolve<'a>(db_fields: Option<&'a DbFieldCollection>, field: &Field) -> Option<&'a DbField> {
    db_fields.and_then(|db_fields| db_fields.get(&field.name))
}

pub(super) fn is_identity(db_fields: Option<&DbFieldCollection>, field: &Field) -> bool {
    resolve(db_fields, field).is_some_and(|column| column.is_identity)
}

fn is_primary(db_fields: Option<&DbFieldCollection>, field: &Field) -> bool {
    resolve(db_fields, field).is_some_and(|column| column.is_primary)
}

fn is_computed(db_fields: Option<&DbFieldCollection>, field: &Field) -> bool {
    resolve(db_fields, field).is_some_and(|column| column.is_computed)
}

fn contains(fields: &[Field], field: &Field) -> bool {
    fields.iter().any(|existing| existing.is_column(&field.name))
}

/// Columns an `INSERT` writes: the identity and computed columns are left to
/// the database.
pub(super) fn insertable<'a>(
    fields: &'a [Field],
    db_fields: Option<&DbFieldCollection>,
) -> Vec<&'a Field> {
    fields
        .iter()
        .filter(|field| !is_identity(db_fields, field) && !is_computed(db_fields, field))
        .collect()
}

/// Columns an upsert writes. The identity column is only written when it is
/// one of the qualifiers.
pub(super) fn upsertable<'a>(
    fields: &'a [Field],
    qualifiers: &[Field],
    db_fields: Option<&DbFieldCollection>,
) -> Vec<&'a Field> {
    fields
        .iter()
        .filter(|field| {
            (!is_identity(db_fields, field) || contains(qualifiers, field))
                && !is_computed(db_fields, field)
        })
        .collect()
}

/// Columns an `UPDATE` assigns: keys, qualifiers and computed columns are
/// never assigned.
pub(super) fn updatable<'a>(
    fields: &'a [Field],
    qualifiers: &[Field],
    db_fields: Option<&DbFieldCollection>,
) -> Vec<&'a Field> {
    fields
        .iter()
        .filter(|field| {
            !is_primary(db_fields, field)
                && !is_identity(db_fields, field)
                && !is_computed(db_fields, field)
                && !contains(qualifiers, field)
        })
        .collect()
}

/// The given qualifiers, or the primary key when none are given.
pub(super) fn qualifiers(given: &[Field], db_fields: Option<&DbFieldCollection>) -> Vec<Field> {
    if !given.is_empty() {
        return given.to_vec();
    }

    db_fields
        .map(|db_fields| db_fields.primaries().map(DbField::as_field).collect())
        .unwrap_or_default()
}

/// Primary columns the caller must supply for an insert to succeed.
pub(super) fn required_primaries(db_fields: Option<&DbFieldCollection>) -> Vec<&DbField> {
    db_fields
        .map(|db_fields| {
            db_fields
                .primaries()
                .filter(|field| !field.is_identity && !field.has_default_value)
                .collect()
        })
        .unwrap_or_default()
}

pub(super) fn contains_column(fields: &[Field], name: &str) -> bool {
    fields.iter().any(|field| field.is_column(name))
}

/// The identity column, falling back to the first primary column.
pub(super) fn returned_key(db_fields: Option<&DbFieldCollection>) -> ReturnedKey<'_> {
    let Some(db_fields) = db_fields else {
        return ReturnedKey::None;
    };

    if let Some(identity) = db_fields.identity() {
        return ReturnedKey::Identity(&identity.name);
    }

    match db_fields.primary() {
        Some(primary) => ReturnedKey::Supplied(&primary.name),
        None => ReturnedKey::None,
    }
}
