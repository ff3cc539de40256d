use super::{Formatter, ToSql};

use crate::stmt::Statement;

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Aggregate(stmt) => stmt.to_sql(f),
            Statement::BatchQuery(stmt) => stmt.to_sql(f),
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DeleteAll(stmt) => stmt.to_sql(f),
            Statement::Exists(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::InsertAll(stmt) => stmt.to_sql(f),
            Statement::Merge(stmt) => stmt.to_sql(f),
            Statement::MergeAll(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::SkipQuery(stmt) => stmt.to_sql(f),
            Statement::Truncate(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::UpdateAll(stmt) => stmt.to_sql(f),
        }
    }
}
