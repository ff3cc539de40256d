use super::QueryGroup;

/// `SELECT COUNT(*)` over the rows matching a filter.
#[derive(Debug, Clone, Default)]
pub struct Count {
    pub table: String,
    pub filter: Option<QueryGroup>,
    pub hints: Option<String>,

    /// Count with a 64-bit result where the dialect distinguishes it.
    pub big: bool,
}

impl Count {
    pub fn new(table: impl Into<String>) -> Count {
        Count {
            table: table.into(),
            ..Count::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<QueryGroup>) -> Count {
        self.filter = Some(filter.into());
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Count {
        self.hints = Some(hints.into());
        self
    }

    pub fn big(mut self) -> Count {
        self.big = true;
        self
    }
}
