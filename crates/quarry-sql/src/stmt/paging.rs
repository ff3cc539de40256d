use super::{Field, OrderField, QueryGroup};

use quarry_core::{Error, Result};

/// `SELECT` of `take` rows after skipping `skip` rows.
#[derive(Debug, Clone, Default)]
pub struct SkipQuery {
    pub table: String,
    pub fields: Vec<Field>,
    pub filter: Option<QueryGroup>,
    pub order_by: Vec<OrderField>,
    pub skip: usize,
    pub take: usize,
    pub hints: Option<String>,
}

/// `SELECT` of one page of rows. Pages are zero-based.
#[derive(Debug, Clone, Default)]
pub struct BatchQuery {
    pub table: String,
    pub fields: Vec<Field>,
    pub filter: Option<QueryGroup>,
    pub order_by: Vec<OrderField>,
    pub page: usize,
    pub rows_per_batch: usize,
    pub hints: Option<String>,
}

impl SkipQuery {
    pub fn new<I>(table: impl Into<String>, fields: I, skip: usize, take: usize) -> SkipQuery
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        SkipQuery {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            skip,
            take,
            ..SkipQuery::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<QueryGroup>) -> SkipQuery {
        self.filter = Some(filter.into());
        self
    }

    pub fn order_by(mut self, order_by: impl IntoIterator<Item = OrderField>) -> SkipQuery {
        self.order_by = order_by.into_iter().collect();
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> SkipQuery {
        self.hints = Some(hints.into());
        self
    }

    /// One-based numbers of the first and last row returned.
    pub fn row_range(&self) -> Result<(usize, usize)> {
        let first = self.skip.checked_add(1);
        let last = self.skip.checked_add(self.take);

        first.zip(last).ok_or_else(|| {
            Error::invalid_configuration(format!(
                "skipping {} rows and taking {} overflows the row number",
                self.skip, self.take
            ))
        })
    }
}

impl BatchQuery {
    pub fn new<I>(table: impl Into<String>, fields: I, page: usize, rows_per_batch: usize) -> BatchQuery
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        BatchQuery {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            page,
            rows_per_batch,
            ..BatchQuery::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<QueryGroup>) -> BatchQuery {
        self.filter = Some(filter.into());
        self
    }

    pub fn order_by(mut self, order_by: impl IntoIterator<Item = OrderField>) -> BatchQuery {
        self.order_by = order_by.into_iter().collect();
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> BatchQuery {
        self.hints = Some(hints.into());
        self
    }

    /// The equivalent offset query.
    pub fn to_skip_query(&self) -> Result<SkipQuery> {
        let skip = self.page.checked_mul(self.rows_per_batch).ok_or_else(|| {
            Error::invalid_configuration(format!(
                "page {} of {} rows overflows the row number",
                self.page, self.rows_per_batch
            ))
        })?;

        Ok(SkipQuery {
            table: self.table.clone(),
            fields: self.fields.clone(),
            filter: self.filter.clone(),
            order_by: self.order_by.clone(),
            skip,
            take: self.rows_per_batch,
            hints: self.hints.clone(),
        })
    }
}
