use super::{Field, QueryGroup};

use quarry_core::schema::DbFieldCollection;

use std::sync::Arc;

/// `UPDATE` of the rows matching a filter.
///
/// Primary and identity columns are excluded from `SET`. Filter parameters
/// are prefixed with `_` so they never collide with the assigned values.
#[derive(Debug, Clone, Default)]
pub struct Update {
    pub table: String,
    pub fields: Vec<Field>,
    pub filter: Option<QueryGroup>,
    pub db_fields: Option<Arc<DbFieldCollection>>,
    pub hints: Option<String>,
}

/// `UPDATE` of `batch_size` rows, each located by its qualifier columns.
///
/// Qualifiers default to the primary key.
#[derive(Debug, Clone, Default)]
pub struct UpdateAll {
    pub table: String,
    pub fields: Vec<Field>,
    pub qualifiers: Vec<Field>,
    pub db_fields: Option<Arc<DbFieldCollection>>,
    pub batch_size: usize,
    pub hints: Option<String>,
}

impl Update {
    pub fn new<I>(table: impl Into<String>, fields: I) -> Update
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        Update {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            ..Update::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<QueryGroup>) -> Update {
        self.filter = Some(filter.into());
        self
    }

    pub fn db_fields(mut self, db_fields: Arc<DbFieldCollection>) -> Update {
        self.db_fields = Some(db_fields);
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Update {
        self.hints = Some(hints.into());
        self
    }
}

impl UpdateAll {
    pub fn new<I>(table: impl Into<String>, fields: I, batch_size: usize) -> UpdateAll
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        UpdateAll {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            batch_size,
            ..UpdateAll::default()
        }
    }

    pub fn qualifiers<I>(mut self, qualifiers: I) -> UpdateAll
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.qualifiers = qualifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn db_fields(mut self, db_fields: Arc<DbFieldCollection>) -> UpdateAll {
        self.db_fields = Some(db_fields);
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> UpdateAll {
        self.hints = Some(hints.into());
        self
    }
}
