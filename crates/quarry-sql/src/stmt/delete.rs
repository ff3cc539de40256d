use super::{Field, QueryGroup, Value};

use quarry_core::schema::DbFieldCollection;

use std::sync::Arc;

/// `DELETE` of the rows matching a filter. Without a filter every row is
/// deleted.
#[derive(Debug, Clone, Default)]
pub struct Delete {
    pub table: String,
    pub filter: Option<QueryGroup>,
    pub hints: Option<String>,
}

/// `DELETE` of the rows identified by a list of keys.
///
/// Each entry of `keys` holds one value per key column. Key columns default
/// to the primary key.
#[derive(Debug, Clone, Default)]
pub struct DeleteAll {
    pub table: String,
    pub key_fields: Vec<Field>,
    pub keys: Vec<Vec<Value>>,
    pub db_fields: Option<Arc<DbFieldCollection>>,
    pub hints: Option<String>,
}

impl Delete {
    pub fn new(table: impl Into<String>) -> Delete {
        Delete {
            table: table.into(),
            ..Delete::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<QueryGroup>) -> Delete {
        self.filter = Some(filter.into());
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Delete {
        self.hints = Some(hints.into());
        self
    }
}

impl DeleteAll {
    /// Deletes by a single key column.
    pub fn new<I>(table: impl Into<String>, keys: I) -> DeleteAll
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        DeleteAll {
            table: table.into(),
            keys: keys.into_iter().map(|key| vec![key.into()]).collect(),
            ..DeleteAll::default()
        }
    }

    /// Deletes by several key columns; each key holds one value per column.
    pub fn composite(table: impl Into<String>, keys: Vec<Vec<Value>>) -> DeleteAll {
        DeleteAll {
            table: table.into(),
            keys,
            ..DeleteAll::default()
        }
    }

    pub fn key_fields<I>(mut self, key_fields: I) -> DeleteAll
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.key_fields = key_fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn db_fields(mut self, db_fields: Arc<DbFieldCollection>) -> DeleteAll {
        self.db_fields = Some(db_fields);
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> DeleteAll {
        self.hints = Some(hints.into());
        self
    }
}
