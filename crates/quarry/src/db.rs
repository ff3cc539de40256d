mod builder;
pub use builder::Builder;

use crate::{cache::EntityCache, compile::Compiler, expr::Expr, resolver, Options};

use quarry_core::{
    query::QueryGroup,
    schema::{DbFieldCollection, Entity, EntityMeta},
    Connection, Driver, Result,
};
use quarry_sql::Serializer;

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A database handle: a driver plus the options predicates compile with.
///
/// Cloning is cheap; clones share the driver.
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,
    options: Options,
}

impl Db {
    /// Create a new [`Builder`] for configuring a `Db`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// A serializer for the driver's dialect.
    pub fn serializer(&self) -> Serializer {
        Serializer::new(self.driver.dialect())
    }

    /// Opens a connection through the driver.
    pub async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }

    /// The description of `T`, cached for the life of the process.
    pub fn entity<T: Entity>(&self) -> Arc<EntityMeta> {
        EntityCache::global().get::<T>()
    }

    /// Compiles a predicate against `T` without reading the catalog.
    ///
    /// Enum values are encoded as configured by
    /// [`Options::enum_encoding`](crate::Options::enum_encoding).
    pub fn compile<T: Entity>(&self, expr: &Expr) -> Result<QueryGroup> {
        let entity = self.entity::<T>();
        Compiler::new(&entity, &self.options).compile(expr)
    }

    /// Compiles a predicate against `T` using the resolved columns of its
    /// table, which decide enum encoding and nullability.
    pub async fn compile_with_schema<T: Entity>(&self, expr: &Expr) -> Result<QueryGroup> {
        let entity = self.entity::<T>();
        let db_fields = self.db_fields_for::<T>().await?;

        Compiler::new(&entity, &self.options)
            .with_db_fields(&db_fields)
            .compile(expr)
    }

    /// Returns the columns of `table` as reported by the catalog.
    ///
    /// Results are cached per connection URL and table name until
    /// [`flush_all`](crate::flush_all) is called. A table without columns is
    /// reported as [`not found`](quarry_core::Error::is_not_found).
    pub async fn db_fields(&self, table: &str) -> Result<Arc<DbFieldCollection>> {
        resolver::db_fields(&*self.driver, table, None).await
    }

    /// Like [`Db::db_fields`], aborting with a
    /// [`cancelled`](quarry_core::Error::is_cancelled) error once `cancel`
    /// fires.
    pub async fn db_fields_with_cancel(
        &self,
        table: &str,
        cancel: &CancellationToken,
    ) -> Result<Arc<DbFieldCollection>> {
        resolver::db_fields(&*self.driver, table, Some(cancel)).await
    }

    /// The columns of `T`'s table with the primary and identity markers
    /// declared on `T` taking precedence over the catalog's.
    pub async fn db_fields_for<T: Entity>(&self) -> Result<Arc<DbFieldCollection>> {
        let entity = self.entity::<T>();
        let db_fields = self.db_fields(&entity.table).await?;

        Ok(Arc::new(
            DbFieldCollection::clone(&db_fields).with_entity_keys(&entity),
        ))
    }
}
