use super::{
    clause::{Hints, Where},
    columns, Comma, Delimited, Formatter, Ident, Placeholder, TableName, ToSql,
};

use crate::stmt::{self, Field, QueryGroup};

use std::collections::HashSet;

/// `[a] = @a`
pub(super) struct Assignment<'a>(pub(super) &'a Field);

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = columns::updatable(&self.fields, &[], self.db_fields.as_deref());

        let filter = self.filter.clone().map(|mut filter| {
            let prefix = filter_prefix(&filter, &columns);
            filter.prefix_parameters(&prefix);
            filter
        });

        fmt!(
            f, "UPDATE " TableName(&self.table) Hints(self.hints.as_deref()) " SET "
            Comma(columns.iter().copied().map(Assignment)) Where(filter.as_ref())
        );
        f.terminate();
    }
}

impl ToSql for &stmt::UpdateAll {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let db_fields = self.db_fields.as_deref();
        let qualifiers = columns::qualifiers(&self.qualifiers, db_fields);
        let columns = columns::updatable(&self.fields, &qualifiers, db_fields);

        for index in 0..self.batch_size {
            f.batch_index = index;

            if index > 0 {
                fmt!(f, " ");
            }

            fmt!(
                f, "UPDATE " TableName(&self.table) Hints(self.hints.as_deref()) " SET "
                Comma(columns.iter().copied().map(Assignment)) " WHERE ("
                Delimited(qualifiers.iter().map(Assignment), " AND ") ")"
            );
            f.terminate();
        }

        f.batch_index = 0;
    }
}

/// `_`, or as many underscores as it takes for no filter value to share a
/// name with an assigned column.
fn filter_prefix(filter: &QueryGroup, columns: &[&Field]) -> String {
    let assigned: HashSet<String> = columns
        .iter()
        .map(|field| field.parameter_name().to_lowercase())
        .collect();

    let bound: Vec<String> = filter
        .fields()
        .into_iter()
        .filter_map(|field| field.bindings().ok())
        .flatten()
        .map(|param| param.name.to_lowercase())
        .collect();

    let mut prefix = String::from("_");
    while bound
        .iter()
        .any(|name| assigned.contains(&format!("{prefix}{name}")))
    {
        prefix.push('_');
    }

    prefix
}

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.0.name) " = " Placeholder(self.0.parameter_name()));
    }
}
