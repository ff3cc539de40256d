use std::fmt;

/// How the children of a [`QueryGroup`](super::QueryGroup) are combined.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn is_and(self) -> bool {
        matches!(self, Self::And)
    }

    pub fn is_or(self) -> bool {
        matches!(self, Self::Or)
    }

    /// The SQL keyword, surrounded by spaces.
    pub fn separator(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => "AND".fmt(f),
            Self::Or => "OR".fmt(f),
        }
    }
}
