mod capability;
pub use capability::{Capability, IdentityRetrieval, Paging, Upsert};

mod dialect;
pub use dialect::Dialect;

mod row;
pub use row::Row;

use crate::{async_trait, query::Parameter, Result};

use std::{borrow::Cow, fmt::Debug};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Identifies the database the driver connects to. Used as the
    /// connection identity when caching schema metadata.
    fn url(&self) -> Cow<'_, str>;

    /// The SQL dialect spoken by the database.
    fn dialect(&self) -> Dialect;

    /// Describes the dialect's capabilities, which guard statement rendering.
    fn capability(&self) -> &'static Capability {
        self.dialect().capability()
    }

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Runs a statement that returns rows.
    ///
    /// Parameters are referenced in `sql` by name, with the dialect's prefix.
    async fn query(&mut self, sql: &str, params: &[Parameter]) -> Result<Vec<Row>>;

    /// Runs a statement and returns the number of affected rows.
    async fn execute(&mut self, sql: &str, params: &[Parameter]) -> Result<u64>;
}
