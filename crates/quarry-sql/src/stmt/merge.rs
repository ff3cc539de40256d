use super::Field;

use quarry_core::schema::DbFieldCollection;

use std::sync::Arc;

/// Insert-or-update of one row, matched on the qualifier columns.
///
/// Qualifiers default to the primary key. The generated or matched key is
/// returned as `Result`.
#[derive(Debug, Clone, Default)]
pub struct Merge {
    pub table: String,
    pub fields: Vec<Field>,
    pub qualifiers: Vec<Field>,
    pub db_fields: Option<Arc<DbFieldCollection>>,
    pub hints: Option<String>,
}

/// Insert-or-update of `batch_size` rows in one round-trip.
#[derive(Debug, Clone, Default)]
pub struct MergeAll {
    pub table: String,
    pub fields: Vec<Field>,
    pub qualifiers: Vec<Field>,
    pub db_fields: Option<Arc<DbFieldCollection>>,
    pub batch_size: usize,
    pub hints: Option<String>,
}

impl Merge {
    pub fn new<I>(table: impl Into<String>, fields: I) -> Merge
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        Merge {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            ..Merge::default()
        }
    }

    pub fn qualifiers<I>(mut self, qualifiers: I) -> Merge
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.qualifiers = qualifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn db_fields(mut self, db_fields: Arc<DbFieldCollection>) -> Merge {
        self.db_fields = Some(db_fields);
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Merge {
        self.hints = Some(hints.into());
        self
    }
}

impl MergeAll {
    pub fn new<I>(table: impl Into<String>, fields: I, batch_size: usize) -> MergeAll
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        MergeAll {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            batch_size,
            ..MergeAll::default()
        }
    }

    pub fn qualifiers<I>(mut self, qualifiers: I) -> MergeAll
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.qualifiers = qualifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn db_fields(mut self, db_fields: Arc<DbFieldCollection>) -> MergeAll {
        self.db_fields = Some(db_fields);
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> MergeAll {
        self.hints = Some(hints.into());
        self
    }
}
