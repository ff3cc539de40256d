//! Descriptions of the statements the [`Serializer`](crate::Serializer) renders.
//!
//! A statement names its table and projection, and optionally a filter, an
//! order, table hints and the table's resolved columns. Rendering decisions
//! that depend on keys (identity retrieval, excluded columns, merge
//! qualifiers) read the resolved columns.

mod aggregate;
pub use aggregate::{Aggregate, AggregateFunction};

mod count;
pub use count::Count;

mod delete;
pub use delete::{Delete, DeleteAll};

mod exists;
pub use exists::Exists;

mod insert;
pub use insert::{Insert, InsertAll};

mod merge;
pub use merge::{Merge, MergeAll};

mod paging;
pub use paging::{BatchQuery, SkipQuery};

mod query;
pub use query::Query;

mod truncate;
pub use truncate::Truncate;

mod update;
pub use update::{Update, UpdateAll};

pub use quarry_core::query::*;

#[derive(Debug, Clone)]
pub enum Statement {
    Aggregate(Aggregate),
    BatchQuery(BatchQuery),
    Count(Count),
    Delete(Delete),
    DeleteAll(DeleteAll),
    Exists(Exists),
    Insert(Insert),
    InsertAll(InsertAll),
    Merge(Merge),
    MergeAll(MergeAll),
    Query(Query),
    SkipQuery(SkipQuery),
    Truncate(Truncate),
    Update(Update),
    UpdateAll(UpdateAll),
}

impl Statement {
    /// The target table, as given.
    pub fn table(&self) -> &str {
        match self {
            Statement::Aggregate(stmt) => &stmt.table,
            Statement::BatchQuery(stmt) => &stmt.table,
            Statement::Count(stmt) => &stmt.table,
            Statement::Delete(stmt) => &stmt.table,
            Statement::DeleteAll(stmt) => &stmt.table,
            Statement::Exists(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::InsertAll(stmt) => &stmt.table,
            Statement::Merge(stmt) => &stmt.table,
            Statement::MergeAll(stmt) => &stmt.table,
            Statement::Query(stmt) => &stmt.table,
            Statement::SkipQuery(stmt) => &stmt.table,
            Statement::Truncate(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
            Statement::UpdateAll(stmt) => &stmt.table,
        }
    }

    /// Table hints, if any were requested.
    pub fn hints(&self) -> Option<&str> {
        match self {
            Statement::Aggregate(stmt) => stmt.hints.as_deref(),
            Statement::BatchQuery(stmt) => stmt.hints.as_deref(),
            Statement::Count(stmt) => stmt.hints.as_deref(),
            Statement::Delete(stmt) => stmt.hints.as_deref(),
            Statement::DeleteAll(stmt) => stmt.hints.as_deref(),
            Statement::Exists(stmt) => stmt.hints.as_deref(),
            Statement::Insert(stmt) => stmt.hints.as_deref(),
            Statement::InsertAll(stmt) => stmt.hints.as_deref(),
            Statement::Merge(stmt) => stmt.hints.as_deref(),
            Statement::MergeAll(stmt) => stmt.hints.as_deref(),
            Statement::Query(stmt) => stmt.hints.as_deref(),
            Statement::SkipQuery(stmt) => stmt.hints.as_deref(),
            Statement::Truncate(_) => None,
            Statement::Update(stmt) => stmt.hints.as_deref(),
            Statement::UpdateAll(stmt) => stmt.hints.as_deref(),
        }
    }

    /// The predicate restricting the affected rows, if any.
    pub fn filter(&self) -> Option<&QueryGroup> {
        match self {
            Statement::Aggregate(stmt) => stmt.filter.as_ref(),
            Statement::BatchQuery(stmt) => stmt.filter.as_ref(),
            Statement::Count(stmt) => stmt.filter.as_ref(),
            Statement::Delete(stmt) => stmt.filter.as_ref(),
            Statement::Exists(stmt) => stmt.filter.as_ref(),
            Statement::Query(stmt) => stmt.filter.as_ref(),
            Statement::SkipQuery(stmt) => stmt.filter.as_ref(),
            Statement::Update(stmt) => stmt.filter.as_ref(),
            _ => None,
        }
    }
}

macro_rules! impl_from_stmt {
    ( $( $name:ident ),* ) => {
        $(
            impl From<$name> for Statement {
                fn from(stmt: $name) -> Statement {
                    Statement::$name(stmt)
                }
            }
        )*
    };
}

impl_from_stmt!(
    Aggregate, BatchQuery, Count, Delete, DeleteAll, Exists, Insert, InsertAll, Merge, MergeAll,
    Query, SkipQuery, Truncate, Update, UpdateAll
);
