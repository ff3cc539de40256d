//! Reads table columns from the database catalog.

mod catalog;
mod native_type;

use crate::DbFieldCache;

use quarry_core::{
    query::Parameter,
    schema::{DbField, DbFieldCollection, TableName},
    Driver, Error, Result,
};

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Returns the columns of `table`, from the process-wide cache when present.
pub(crate) async fn db_fields(
    driver: &dyn Driver,
    table: &str,
    cancel: Option<&CancellationToken>,
) -> Result<Arc<DbFieldCollection>> {
    if table.trim().is_empty() {
        return Err(Error::invalid_configuration(
            "the table name must not be empty",
        ));
    }

    let url = driver.url();
    let cache = DbFieldCache::global();

    if let Some(db_fields) = cache.get(&url, table) {
        tracing::debug!(table, "serving columns from cache");
        return Ok(db_fields);
    }

    let name = TableName::parse(table);

    let fields = match cancel {
        Some(cancel) => {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Error::cancelled()),
                fields = fetch_with_retry(driver, name) => fields?,
            }
        }
        None => fetch_with_retry(driver, name).await?,
    };

    if fields.is_empty() {
        return Err(Error::not_found(format!(
            "no columns found for table `{table}`"
        )));
    }

    Ok(cache.insert(&url, table, Arc::new(DbFieldCollection::new(fields))))
}

/// Retries once, on a new connection, when the first attempt reports a busy
/// connection.
async fn fetch_with_retry(driver: &dyn Driver, table: TableName<'_>) -> Result<Vec<DbField>> {
    match fetch(driver, table).await {
        Err(err) if err.root().is_connection_busy() => {
            tracing::warn!(
                table = table.name,
                error = %err,
                "connection busy; retrying catalog query on a new connection"
            );

            fetch(driver, table).await
        }
        result => result,
    }
}

async fn fetch(driver: &dyn Driver, table: TableName<'_>) -> Result<Vec<DbField>> {
    let dialect = driver.dialect();

    tracing::debug!(
        table = table.name,
        schema = table.schema,
        %dialect,
        "querying catalog"
    );

    let params = [
        Parameter::new("Schema", table.schema.or(catalog::default_schema(dialect))),
        Parameter::new("TableName", table.name),
    ];

    let mut connection = driver.connect().await?;
    let rows = connection.query(catalog::sql(dialect), &params).await?;

    let mut fields = rows
        .iter()
        .map(|row| catalog::decode(dialect, row))
        .collect::<Result<Vec<_>>>()?;

    catalog::finish(dialect, &mut fields);

    Ok(fields)
}
