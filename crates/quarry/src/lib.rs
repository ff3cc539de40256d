mod cache;
pub use cache::{flush_all, DbFieldCache, EntityCache};

pub mod compile;
pub use compile::Compiler;

pub mod db;
pub use db::Db;

pub mod expr;
pub use expr::Expr;

mod options;
pub use options::{EnumEncoding, NullSemantics, Options};

mod resolver;

pub use quarry_core::{
    bail,
    driver::{self, Connection, Dialect, Driver},
    err,
    query::{self, QueryField, QueryGroup, Type, Value},
    schema::{self, DbField, DbFieldCollection, Entity, EntityMeta, Property},
    Error, Result,
};
pub use quarry_sql::{self as sql, stmt, Params, Serializer, Statement};
pub use tokio_util::sync::CancellationToken;
