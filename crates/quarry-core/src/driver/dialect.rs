use super::Capability;

use std::fmt;

/// A target database's SQL syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    SqlServer,
    PostgreSql,
    MySql,
    Sqlite,
}

impl Dialect {
    pub fn capability(self) -> &'static Capability {
        match self {
            Self::SqlServer => &Capability::SQL_SERVER,
            Self::PostgreSql => &Capability::POSTGRESQL,
            Self::MySql => &Capability::MYSQL,
            Self::Sqlite => &Capability::SQLITE,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SqlServer => "SQL Server".fmt(f),
            Self::PostgreSql => "PostgreSQL".fmt(f),
            Self::MySql => "MySQL".fmt(f),
            Self::Sqlite => "SQLite".fmt(f),
        }
    }
}
