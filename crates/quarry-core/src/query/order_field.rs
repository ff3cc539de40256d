use std::fmt;

/// Sort direction of an [`OrderField`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

/// One `ORDER BY` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderField {
    pub name: String,
    pub order: Order,
}

impl Order {
    pub fn text(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text().fmt(f)
    }
}

impl OrderField {
    pub fn ascending(name: impl Into<String>) -> OrderField {
        OrderField {
            name: name.into(),
            order: Order::Ascending,
        }
    }

    pub fn descending(name: impl Into<String>) -> OrderField {
        OrderField {
            name: name.into(),
            order: Order::Descending,
        }
    }

    pub fn parse<I>(names: I, order: Order) -> Vec<OrderField>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        names
            .into_iter()
            .map(|name| OrderField {
                name: name.into(),
                order,
            })
            .collect()
    }
}
