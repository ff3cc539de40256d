use super::Field;

use quarry_core::schema::DbFieldCollection;

use std::sync::Arc;

/// `INSERT` of one row, returning the generated key as `Result`.
///
/// The identity column is never inserted.
#[derive(Debug, Clone, Default)]
pub struct Insert {
    pub table: String,
    pub fields: Vec<Field>,
    pub db_fields: Option<Arc<DbFieldCollection>>,
    pub hints: Option<String>,
}

/// `INSERT` of `batch_size` rows in one round-trip.
///
/// Placeholders of the `i`-th row carry the `_i` suffix; the first row's
/// placeholders are unsuffixed.
#[derive(Debug, Clone, Default)]
pub struct InsertAll {
    pub table: String,
    pub fields: Vec<Field>,
    pub db_fields: Option<Arc<DbFieldCollection>>,
    pub batch_size: usize,
    pub hints: Option<String>,
}

impl Insert {
    pub fn new<I>(table: impl Into<String>, fields: I) -> Insert
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        Insert {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            ..Insert::default()
        }
    }

    pub fn db_fields(mut self, db_fields: Arc<DbFieldCollection>) -> Insert {
        self.db_fields = Some(db_fields);
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Insert {
        self.hints = Some(hints.into());
        self
    }
}

impl InsertAll {
    pub fn new<I>(table: impl Into<String>, fields: I, batch_size: usize) -> InsertAll
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        InsertAll {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            batch_size,
            ..InsertAll::default()
        }
    }

    pub fn db_fields(mut self, db_fields: Arc<DbFieldCollection>) -> InsertAll {
        self.db_fields = Some(db_fields);
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> InsertAll {
        self.hints = Some(hints.into());
        self
    }
}
