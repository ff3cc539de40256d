use super::{Formatter, Period, ToSql};

use quarry_core::{query::Field, schema::split_table_name};

/// A quoted identifier. Quotes already present on the name are replaced by
/// the dialect's.
pub(super) struct Ident<S>(pub(super) S);

/// A possibly schema-qualified table name; each part is quoted on its own.
pub(super) struct TableName<'a>(pub(super) &'a str);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let capability = f.serializer.capability;
        let name = Field::new(self.0.as_ref());

        f.dst.push(capability.open_quote);
        f.dst.push_str(name.unquoted_name());
        f.dst.push(capability.close_quote);
    }
}

impl ToSql for &Field {
    fn to_sql(self, f: &mut Formatter<'_>) {
        Ident(&self.name).to_sql(f);
    }
}

impl ToSql for TableName<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        Period(split_table_name(self.0).into_iter().map(Ident)).to_sql(f);
    }
}
