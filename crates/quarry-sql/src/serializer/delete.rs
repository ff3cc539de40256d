use super::{
    clause::{Hints, Where},
    columns, Formatter, TableName, ToSql,
};

use crate::stmt::{self, Operation, QueryField, QueryGroup, Value};

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        delete(f, &self.table, self.hints.as_deref(), self.filter.as_ref());
    }
}

impl ToSql for &stmt::DeleteAll {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let key_fields = columns::qualifiers(&self.key_fields, self.db_fields.as_deref());

        let filter = match &key_fields[..] {
            [key] => {
                let values = self.keys.iter().filter_map(|key| key.first().cloned());
                QueryGroup::from(QueryField::new(&key.name, Operation::In, Value::list(values)))
            }
            _ => {
                let mut filter = QueryGroup::or(self.keys.iter().map(|key| {
                    QueryGroup::and(
                        key_fields
                            .iter()
                            .zip(key)
                            .map(|(field, value)| QueryField::equal(&field.name, value.clone())),
                    )
                }));
                filter.fix_parameters();
                filter
            }
        };

        delete(f, &self.table, self.hints.as_deref(), Some(&filter));
    }
}

fn delete(f: &mut Formatter<'_>, table: &str, hints: Option<&str>, filter: Option<&QueryGroup>) {
    fmt!(f, "DELETE FROM " TableName(table) Hints(hints) Where(filter));
    f.terminate();
}
