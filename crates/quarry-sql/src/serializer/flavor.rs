use super::Serializer;

use quarry_core::Dialect;

impl Serializer {
    pub fn new(dialect: Dialect) -> Serializer {
        Serializer {
            dialect,
            capability: dialect.capability(),
        }
    }

    pub fn sql_server() -> Serializer {
        Serializer::new(Dialect::SqlServer)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Dialect::PostgreSql)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Dialect::MySql)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Dialect::Sqlite)
    }

    pub(super) fn is_sqlite(&self) -> bool {
        matches!(self.dialect, Dialect::Sqlite)
    }

    pub(super) fn is_sql_server(&self) -> bool {
        matches!(self.dialect, Dialect::SqlServer)
    }
}
