use super::{
    clause::Hints,
    columns::{self, ReturnedKey},
    insert::{InsertInto, ReturnResult, Values},
    Comma, Delimited, Formatter, Ident, Placeholder, TableName, ToSql,
};

use crate::stmt::{self, Field};

use quarry_core::{driver::Upsert, schema::DbFieldCollection};

/// The parts shared by `Merge` and `MergeAll`.
struct MergeInto<'a> {
    table: &'a str,
    hints: Option<&'a str>,
    fields: &'a [Field],
    qualifiers: Vec<Field>,
    db_fields: Option<&'a DbFieldCollection>,
}

impl ToSql for &stmt::Merge {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let db_fields = self.db_fields.as_deref();

        MergeInto {
            table: &self.table,
            hints: self.hints.as_deref(),
            fields: &self.fields,
            qualifiers: columns::qualifiers(&self.qualifiers, db_fields),
            db_fields,
        }
        .render(f, 1);
    }
}

impl ToSql for &stmt::MergeAll {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let db_fields = self.db_fields.as_deref();
        let merge = MergeInto {
            table: &self.table,
            hints: self.hints.as_deref(),
            fields: &self.fields,
            qualifiers: columns::qualifiers(&self.qualifiers, db_fields),
            db_fields,
        };

        let capability = f.serializer.capability;

        // A single statement carries every row when statements cannot be
        // chained.
        if !capability.multiple_statements && capability.upsert == Upsert::OnConflict {
            merge.render(f, self.batch_size);
            return;
        }

        for index in 0..self.batch_size {
            f.batch_index = index;

            if index > 0 {
                fmt!(f, " ");
            }

            merge.render(f, 1);
        }

        f.batch_index = 0;
    }
}

impl MergeInto<'_> {
    fn render(&self, f: &mut Formatter<'_>, rows: usize) {
        match f.serializer.capability.upsert {
            Upsert::Merge => self.merge(f),
            Upsert::OnConflict => self.on_conflict(f, rows),
            Upsert::OnDuplicateKey => self.on_duplicate_key(f),
        }
    }

    /// The identity column, else the first primary column, else the first
    /// qualifier.
    fn key(&self) -> ReturnedKey<'_> {
        match columns::returned_key(self.db_fields) {
            ReturnedKey::None => match self.qualifiers.first() {
                Some(qualifier) => ReturnedKey::Supplied(&qualifier.name),
                None => ReturnedKey::None,
            },
            key => key,
        }
    }

    fn merge(&self, f: &mut Formatter<'_>) {
        let source = columns::upsertable(self.fields, &self.qualifiers, self.db_fields);
        let updates = columns::updatable(self.fields, &self.qualifiers, self.db_fields);
        let inserts = columns::insertable(self.fields, self.db_fields);

        fmt!(
            f, "MERGE " TableName(self.table) Hints(self.hints) " AS T USING (SELECT "
            Comma(source.iter().copied().map(SourceColumn)) ") AS S ON ("
            Delimited(self.qualifiers.iter().map(Matches), " AND ") ")"
        );

        if !updates.is_empty() {
            fmt!(
                f, " WHEN MATCHED THEN UPDATE SET "
                Comma(updates.iter().copied().map(FromSource))
            );
        }

        fmt!(
            f, " WHEN NOT MATCHED THEN INSERT (" Comma(inserts.iter().copied()) ") VALUES ("
            Comma(inserts.iter().copied().map(Sourced)) ")"
        );

        if let ReturnedKey::Identity(name) | ReturnedKey::Supplied(name) = self.key() {
            fmt!(f, " OUTPUT INSERTED." Ident(name) " AS " Ident("Result"));
        }

        f.terminate();
    }

    fn on_conflict(&self, f: &mut Formatter<'_>, rows: usize) {
        let columns = columns::upsertable(self.fields, &self.qualifiers, self.db_fields);
        let updates = columns::updatable(self.fields, &self.qualifiers, self.db_fields);

        fmt!(f, InsertInto { table: self.table, hints: self.hints, columns: &columns } " VALUES ");

        for index in 0..rows {
            if rows > 1 {
                f.batch_index = index;
            }

            if index > 0 {
                fmt!(f, ", ");
            }

            fmt!(f, Values(&columns));
        }

        if rows > 1 {
            f.batch_index = 0;
        }

        fmt!(f, " ON CONFLICT (" Comma(&self.qualifiers) ") ");

        if updates.is_empty() {
            fmt!(f, "DO NOTHING");
        } else {
            fmt!(f, "DO UPDATE SET " Comma(updates.iter().copied().map(Excluded)));
        }

        ReturnResult(self.key()).to_sql(f);
    }

    fn on_duplicate_key(&self, f: &mut Formatter<'_>) {
        let columns = columns::upsertable(self.fields, &self.qualifiers, self.db_fields);
        let updates = columns::updatable(self.fields, &self.qualifiers, self.db_fields);
        let identity = self.db_fields.and_then(DbFieldCollection::identity);

        fmt!(
            f, InsertInto { table: self.table, hints: self.hints, columns: &columns }
            " VALUES " Values(&columns) " ON DUPLICATE KEY UPDATE "
        );

        // Reports the matched row's identity through the last insert id.
        if let Some(identity) = identity {
            let column = Ident(&identity.name);
            fmt!(f, column " = LAST_INSERT_ID(" Ident(&identity.name) ")");

            if !updates.is_empty() {
                fmt!(f, ", ");
            }
        }

        if updates.is_empty() && identity.is_none() {
            if let Some(qualifier) = self.qualifiers.first() {
                fmt!(f, qualifier " = " qualifier);
            }
        }

        fmt!(f, Comma(updates.iter().copied().map(FromValues)));

        ReturnResult(self.key()).to_sql(f);
    }
}

/// `@a AS [a]`
struct SourceColumn<'a>(&'a Field);

/// `S.[a] = T.[a]`
struct Matches<'a>(&'a Field);

/// `T.[a] = S.[a]`
struct FromSource<'a>(&'a Field);

/// `S.[a]`
struct Sourced<'a>(&'a Field);

/// `[a] = EXCLUDED.[a]`
struct Excluded<'a>(&'a Field);

/// `[a] = VALUES([a])`
struct FromValues<'a>(&'a Field);

impl ToSql for SourceColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Placeholder(self.0.parameter_name()) " AS " self.0);
    }
}

impl ToSql for Matches<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "S." self.0 " = T." self.0);
    }
}

impl ToSql for FromSource<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "T." self.0 " = S." self.0);
    }
}

impl ToSql for Sourced<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "S." self.0);
    }
}

impl ToSql for Excluded<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " = EXCLUDED." self.0);
    }
}

impl ToSql for FromValues<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " = VALUES(" self.0 ")");
    }
}
