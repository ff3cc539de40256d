use super::{
    clause::Hints,
    columns::{self, ReturnedKey},
    Comma, Formatter, Ident, Placeholder, TableName, ToSql,
};

use crate::stmt::{self, Field};

use quarry_core::driver::IdentityRetrieval;

/// `INSERT INTO <table> <hints> (<columns>)`
pub(super) struct InsertInto<'a> {
    pub(super) table: &'a str,
    pub(super) hints: Option<&'a str>,
    pub(super) columns: &'a [&'a Field],
}

/// `(@a, @b)` for the current statement of a batch.
pub(super) struct Values<'a>(pub(super) &'a [&'a Field]);

/// Returns the key of the written row as `Result`, in the dialect's style.
pub(super) struct ReturnResult<'a>(pub(super) ReturnedKey<'a>);

/// The key column, or `NULL` without one.
struct KeyColumn<'a>(ReturnedKey<'a>);

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let db_fields = self.db_fields.as_deref();
        let columns = columns::insertable(&self.fields, db_fields);

        insert(f, &self.table, self.hints.as_deref(), &columns, 1);
        ReturnResult(columns::returned_key(db_fields)).to_sql(f);
    }
}

impl ToSql for &stmt::InsertAll {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let db_fields = self.db_fields.as_deref();
        let columns = columns::insertable(&self.fields, db_fields);
        let key = columns::returned_key(db_fields);

        if !f.serializer.capability.multiple_statements {
            insert(f, &self.table, self.hints.as_deref(), &columns, self.batch_size);
            ReturnResult(key).to_sql(f);
            return;
        }

        for index in 0..self.batch_size {
            f.batch_index = index;

            if index > 0 {
                fmt!(f, " ");
            }

            insert(f, &self.table, self.hints.as_deref(), &columns, 1);
            ReturnResult(key).to_sql(f);
        }

        f.batch_index = 0;
    }
}

/// Renders an `INSERT` of `rows` rows. Rows after the first take the suffix of
/// their position.
fn insert(f: &mut Formatter<'_>, table: &str, hints: Option<&str>, columns: &[&Field], rows: usize) {
    fmt!(f, InsertInto { table, hints, columns } " VALUES ");

    if rows == 1 {
        fmt!(f, Values(columns));
        return;
    }

    for index in 0..rows {
        f.batch_index = index;

        if index > 0 {
            fmt!(f, ", ");
        }

        fmt!(f, Values(columns));
    }

    f.batch_index = 0;
}

impl ToSql for InsertInto<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f, "INSERT INTO " TableName(self.table) Hints(self.hints)
            " (" Comma(self.columns.iter().copied()) ")"
        );
    }
}

impl ToSql for Values<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholders = self.0.iter().map(|field| Placeholder(field.parameter_name()));

        fmt!(f, "(" Comma(placeholders) ")");
    }
}

impl ToSql for ReturnResult<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match f.serializer.capability.identity_retrieval {
            IdentityRetrieval::Returning => {
                fmt!(f, " RETURNING " KeyColumn(self.0) " AS " Ident("Result"));
                f.terminate();
            }
            IdentityRetrieval::Query(expr) => {
                f.terminate();
                fmt!(f, " SELECT ");

                match self.0 {
                    ReturnedKey::Identity(_) => fmt!(f, expr),
                    ReturnedKey::Supplied(name) => {
                        fmt!(f, Placeholder(Field::new(name).parameter_name()));
                    }
                    ReturnedKey::None => fmt!(f, "NULL"),
                }

                fmt!(f, " AS " Ident("Result"));
                f.terminate();
            }
        }
    }
}

impl ToSql for KeyColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            ReturnedKey::Identity(name) | ReturnedKey::Supplied(name) => fmt!(f, Ident(name)),
            ReturnedKey::None => fmt!(f, "NULL"),
        }
    }
}
