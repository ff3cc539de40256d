use super::{Field, OrderField, QueryGroup};

/// `SELECT` of a projection, optionally filtered, ordered and limited.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub table: String,
    pub fields: Vec<Field>,
    pub filter: Option<QueryGroup>,
    pub order_by: Vec<OrderField>,

    /// Maximum number of rows to return.
    pub top: Option<usize>,

    pub hints: Option<String>,
}

impl Query {
    pub fn new<I>(table: impl Into<String>, fields: I) -> Query
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        Query {
            table: table.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            ..Query::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<QueryGroup>) -> Query {
        self.filter = Some(filter.into());
        self
    }

    pub fn order_by(mut self, order_by: impl IntoIterator<Item = OrderField>) -> Query {
        self.order_by = order_by.into_iter().collect();
        self
    }

    pub fn top(mut self, top: usize) -> Query {
        self.top = Some(top);
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Query {
        self.hints = Some(hints.into());
        self
    }
}
