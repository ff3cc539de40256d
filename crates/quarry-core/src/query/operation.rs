use std::fmt;

/// The comparison performed by a [`QueryField`](super::QueryField).
///
/// Null checks are expressed as `Equal` / `NotEqual` against a null value and
/// render as `IS NULL` / `IS NOT NULL`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Like,
    NotLike,
    Between,
    NotBetween,
    In,
    NotIn,
}

impl Operation {
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Equal)
    }

    pub fn is_ne(self) -> bool {
        matches!(self, Self::NotEqual)
    }

    /// True for operations that bind a list of values.
    pub fn is_list(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// True for operations that bind a pair of values.
    pub fn is_range(self) -> bool {
        matches!(self, Self::Between | Self::NotBetween)
    }

    /// True for the negative forms: `<>`, `NOT LIKE`, `NOT BETWEEN`, `NOT IN`.
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            Self::NotEqual | Self::NotLike | Self::NotBetween | Self::NotIn
        )
    }

    /// The logical complement of the operation.
    pub fn negate(self) -> Operation {
        use Operation::*;

        match self {
            Equal => NotEqual,
            NotEqual => Equal,
            LessThan => GreaterThanOrEqual,
            GreaterThan => LessThanOrEqual,
            LessThanOrEqual => GreaterThan,
            GreaterThanOrEqual => LessThan,
            Like => NotLike,
            NotLike => Like,
            Between => NotBetween,
            NotBetween => Between,
            In => NotIn,
            NotIn => In,
        }
    }

    /// The operation that results from swapping both operands.
    pub fn mirror(self) -> Operation {
        use Operation::*;

        match self {
            LessThan => GreaterThan,
            GreaterThan => LessThan,
            LessThanOrEqual => GreaterThanOrEqual,
            GreaterThanOrEqual => LessThanOrEqual,
            op => op,
        }
    }

    /// The SQL text of the operator.
    pub fn text(self) -> &'static str {
        use Operation::*;

        match self {
            Equal => "=",
            NotEqual => "<>",
            LessThan => "<",
            GreaterThan => ">",
            LessThanOrEqual => "<=",
            GreaterThanOrEqual => ">=",
            Like => "LIKE",
            NotLike => "NOT LIKE",
            Between => "BETWEEN",
            NotBetween => "NOT BETWEEN",
            In => "IN",
            NotIn => "NOT IN",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text().fmt(f)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
