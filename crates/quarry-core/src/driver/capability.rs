/// The capability profile of a dialect. Statement rendering consults it
/// before emitting anything.
#[derive(Debug)]
pub struct Capability {
    /// Character opening a quoted identifier.
    pub open_quote: char,

    /// Character closing a quoted identifier.
    pub close_quote: char,

    /// Character preceding a parameter name.
    pub parameter_prefix: char,

    /// Table hints such as `WITH (NOLOCK)` are accepted.
    pub table_hints: bool,

    /// Several statements may be sent in one round-trip.
    pub multiple_statements: bool,

    /// Upper bound on parameters in a single statement text.
    pub max_parameters: usize,

    /// Upper bound on rows or statements in one batch.
    pub max_batch_statements: usize,

    /// Statements end with `;`.
    pub statement_terminator: bool,

    /// Output and input/output parameters are supported.
    pub directional_parameters: bool,

    /// The driver sends parameters untyped, so a column compared with a value
    /// of a different host type is cast to the value's type.
    pub cast_mismatched_fields: bool,

    /// Type integer columns are widened to before `AVG`, if any.
    pub average_widening: Option<&'static str>,

    pub paging: Paging,

    pub upsert: Upsert,

    pub identity_retrieval: IdentityRetrieval,
}

/// How offset paging and row limits are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// `TOP (n)` and `ROW_NUMBER() OVER (...)` in a common table expression.
    RowNumber,

    /// Trailing `LIMIT n OFFSET m`.
    LimitOffset,
}

/// How a merge (insert-or-update) is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// `MERGE ... USING (SELECT ...) AS S ON (...)`.
    Merge,

    /// `INSERT ... ON CONFLICT (...) DO UPDATE SET ...`.
    OnConflict,

    /// `INSERT ... ON DUPLICATE KEY UPDATE ...`.
    OnDuplicateKey,
}

/// How the generated key of an inserted row is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRetrieval {
    /// A `RETURNING` clause on the statement itself.
    Returning,

    /// A separate `SELECT <expr>` following the statement.
    Query(&'static str),
}

impl Capability {
    /// SQL Server capabilities.
    pub const SQL_SERVER: Self = Self {
        open_quote: '[',
        close_quote: ']',
        parameter_prefix: '@',
        table_hints: true,
        multiple_statements: true,
        max_parameters: 2100,
        max_batch_statements: 1000,
        statement_terminator: true,
        directional_parameters: true,
        cast_mismatched_fields: false,
        average_widening: Some("FLOAT"),
        paging: Paging::RowNumber,
        upsert: Upsert::Merge,
        identity_retrieval: IdentityRetrieval::Query("CONVERT(BIGINT, SCOPE_IDENTITY())"),
    };

    /// PostgreSQL capabilities.
    pub const POSTGRESQL: Self = Self {
        open_quote: '"',
        close_quote: '"',
        table_hints: false,
        max_parameters: 32767,
        cast_mismatched_fields: true,
        average_widening: Some("DOUBLE PRECISION"),
        paging: Paging::LimitOffset,
        upsert: Upsert::OnConflict,
        identity_retrieval: IdentityRetrieval::Returning,
        ..Self::SQL_SERVER
    };

    /// MySQL capabilities.
    pub const MYSQL: Self = Self {
        open_quote: '`',
        close_quote: '`',
        table_hints: false,
        max_parameters: 65535,
        directional_parameters: false,
        average_widening: None,
        paging: Paging::LimitOffset,
        upsert: Upsert::OnDuplicateKey,
        identity_retrieval: IdentityRetrieval::Query("LAST_INSERT_ID()"),
        ..Self::SQL_SERVER
    };

    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        table_hints: false,
        // The prepared statement only runs the first statement of the text.
        multiple_statements: false,
        max_parameters: 999,
        statement_terminator: false,
        directional_parameters: false,
        average_widening: None,
        paging: Paging::LimitOffset,
        upsert: Upsert::OnConflict,
        identity_retrieval: IdentityRetrieval::Returning,
        ..Self::SQL_SERVER
    };
}
