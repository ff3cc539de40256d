use super::{Field, QueryGroup};

/// A single-column aggregate over the rows matching a filter.
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub function: AggregateFunction,
    pub table: String,
    pub field: Field,
    pub filter: Option<QueryGroup>,
    pub hints: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Average,
    Max,
    Min,
    Sum,
}

impl AggregateFunction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Average => "AVG",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Sum => "SUM",
        }
    }

    /// Column alias of the result.
    pub fn alias(self) -> &'static str {
        match self {
            Self::Average => "AverageValue",
            Self::Max => "MaxValue",
            Self::Min => "MinValue",
            Self::Sum => "SumValue",
        }
    }
}

impl Aggregate {
    pub fn new(function: AggregateFunction, table: impl Into<String>, field: impl Into<Field>) -> Aggregate {
        Aggregate {
            function,
            table: table.into(),
            field: field.into(),
            filter: None,
            hints: None,
        }
    }

    pub fn average(table: impl Into<String>, field: impl Into<Field>) -> Aggregate {
        Aggregate::new(AggregateFunction::Average, table, field)
    }

    pub fn max(table: impl Into<String>, field: impl Into<Field>) -> Aggregate {
        Aggregate::new(AggregateFunction::Max, table, field)
    }

    pub fn min(table: impl Into<String>, field: impl Into<Field>) -> Aggregate {
        Aggregate::new(AggregateFunction::Min, table, field)
    }

    pub fn sum(table: impl Into<String>, field: impl Into<Field>) -> Aggregate {
        Aggregate::new(AggregateFunction::Sum, table, field)
    }

    pub fn filter(mut self, filter: impl Into<QueryGroup>) -> Aggregate {
        self.filter = Some(filter.into());
        self
    }

    pub fn hints(mut self, hints: impl Into<String>) -> Aggregate {
        self.hints = Some(hints.into());
        self
    }
}
