pub mod driver;
pub use driver::{Capability, Connection, Dialect, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod query;
pub use query::{QueryField, QueryGroup};

pub mod schema;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
