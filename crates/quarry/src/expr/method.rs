use std::fmt;

/// Methods a predicate may call on a field or a constant.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Contains,
    StartsWith,
    EndsWith,
    Any,
    All,
    ToLower,
    ToUpper,
    Trim,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::StartsWith => "StartsWith",
            Self::EndsWith => "EndsWith",
            Self::Any => "Any",
            Self::All => "All",
            Self::ToLower => "ToLower",
            Self::ToUpper => "ToUpper",
            Self::Trim => "Trim",
        }
    }

    /// Builds the `LIKE` pattern matching `text` for the string methods.
    pub(crate) fn like_pattern(self, text: &str) -> Option<String> {
        match self {
            Self::Contains => Some(format!("%{text}%")),
            Self::StartsWith => Some(format!("{text}%")),
            Self::EndsWith => Some(format!("%{text}")),
            _ => None,
        }
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}
