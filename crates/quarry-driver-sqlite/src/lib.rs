mod value;
pub(crate) use value::Value;

use quarry_core::{
    async_trait,
    driver::{Dialect, Driver, Row},
    query::Parameter,
    Error, Result,
};
use rusqlite::{Connection as RusqliteConnection, ErrorCode, Statement};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_configuration(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    /// Each in-memory connection opens its own, empty, database.
    async fn connect(&self) -> Result<Box<dyn quarry_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(sqlite_error)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(sqlite_error)?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl quarry_core::Connection for Connection {
    async fn query(&mut self, sql: &str, params: &[Parameter]) -> Result<Vec<Row>> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(sqlite_error)?;
        bind(&mut stmt, params)?;

        let width = stmt.column_count();
        let mut rows = stmt.raw_query();
        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(sqlite_error)? {
            let values = (0..width)
                .map(|index| row.get_ref(index).map(|value| Value::from_sql(value).into_inner()))
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(sqlite_error)?;

            ret.push(Row::from_vec(values));
        }

        Ok(ret)
    }

    async fn execute(&mut self, sql: &str, params: &[Parameter]) -> Result<u64> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(sqlite_error)?;
        bind(&mut stmt, params)?;

        let count = stmt.raw_execute().map_err(sqlite_error)?;
        Ok(count as u64)
    }
}

/// Binds parameters by name. Parameters the statement does not reference are
/// skipped.
fn bind(stmt: &mut Statement<'_>, params: &[Parameter]) -> Result<()> {
    for param in params {
        let Some(index) = stmt
            .parameter_index(&format!("@{}", param.name))
            .map_err(sqlite_error)?
        else {
            continue;
        };

        stmt.raw_bind_parameter(index, Value::from(param.value.clone()))
            .map_err(sqlite_error)?;
    }

    Ok(())
}

fn sqlite_error(err: rusqlite::Error) -> Error {
    match err.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => Error::connection_busy(err),
        _ => Error::driver_operation_failed(err),
    }
}
