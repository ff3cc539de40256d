use super::QueryGroup;

/// Checks whether any row matches a filter.
#[derive(Debug, Clone, Default)]
pub struct Exists {
    pub table: String,
    pub filter: Option<QueryGroup>,
    pub hints: Option<String>,
}

impl Exists {
    pub fn new(table: impl Into<String>) -> Exists {
        Exists {
            table: table.into(),
            ..Exists::default()
        }
    }

    pub fn filter(mut self, filter: impl Into<QueryGroup>) -> Exists {
        self.filter = Some(filter.into());
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Exists {
        self.hints = Some(hints.into());
        self
    }
}
