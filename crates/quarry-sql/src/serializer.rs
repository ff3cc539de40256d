#[macro_use]
mod fmt;
use fmt::ToSql;

mod columns;

mod delim;
use delim::{Comma, Delimited, Period};

mod flavor;

mod guard;

mod ident;
use ident::{Ident, TableName};

mod params;
pub use params::Params;
use params::{Binding, Placeholder};

// Fragment serializers
mod clause;
mod delete;
mod filter;
mod insert;
mod merge;
mod query;
mod statement;
mod ty;
mod update;

use crate::stmt::{QueryGroup, Statement};

use quarry_core::{query::Parameter, Capability, Dialect, Error, Result};

/// Renders statements to SQL text for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    dialect: Dialect,

    /// Guards rendering and selects the dialect-specific forms.
    capability: &'static Capability,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Values bound while rendering. Only handed to the caller once the whole
    /// statement rendered successfully.
    params: &'a mut Vec<Parameter>,

    /// Index of the statement within a batch. Placeholders of every statement
    /// but the first carry it as a `_<index>` suffix.
    batch_index: usize,

    /// Number of placeholders written so far.
    placeholders: usize,

    /// First error hit while rendering.
    error: Option<Error>,
}

impl Serializer {
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn capability(&self) -> &'static Capability {
        self.capability
    }

    /// Serializes a statement.
    ///
    /// Values bound by filters are pushed to `params` in placeholder order.
    /// Nothing is pushed when an error is returned.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        self.check(stmt)?;

        let sql = self.render(params, |f| stmt.to_sql(f))?;

        tracing::trace!(dialect = %self.dialect, sql = %sql, "serialized statement");
        Ok(sql)
    }

    /// Serializes the bare text of a filter, as it appears after `WHERE`.
    ///
    /// An empty filter renders as an empty string.
    pub fn filter(&self, filter: &QueryGroup, params: &mut impl Params) -> Result<String> {
        self.check_filter(filter)?;

        if filter.is_empty() {
            return Ok(String::new());
        }

        self.render(params, |f| filter.to_sql(f))
    }

    fn render(
        &self,
        params: &mut impl Params,
        body: impl FnOnce(&mut Formatter<'_>),
    ) -> Result<String> {
        let mut ret = String::new();
        let mut staged = vec![];

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: &mut staged,
            batch_index: 0,
            placeholders: 0,
            error: None,
        };

        body(&mut fmt);
        fmt.finish()?;

        for param in staged {
            params.push(param);
        }

        Ok(ret)
    }
}

impl Formatter<'_> {
    /// Records the first rendering error; later ones are dropped.
    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Ends a statement with the dialect's terminator.
    fn terminate(&mut self) {
        if self.serializer.capability.statement_terminator {
            self.dst.push(';');
        }
    }

    fn finish(self) -> Result<()> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let max = self.serializer.capability.max_parameters;
        if self.placeholders > max {
            return Err(Error::unsupported_operation(format!(
                "the statement uses {} parameters but {} accepts at most {max}",
                self.placeholders, self.serializer.dialect
            )));
        }

        Ok(())
    }
}
