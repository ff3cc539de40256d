use crate::query::field::unquote;

/// A table name split into its optional schema and the table itself, both
/// unquoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableName<'a> {
    pub schema: Option<&'a str>,
    pub name: &'a str,
}

impl<'a> TableName<'a> {
    /// Parses `table`, `schema.table` or `[schema].[table]`.
    ///
    /// Only the last two parts are kept; a leading database qualifier is
    /// ignored.
    pub fn parse(name: &'a str) -> TableName<'a> {
        let mut parts = split_table_name(name).into_iter().rev().map(unquote);

        let name = parts.next().unwrap_or_default();
        let schema = parts.next().filter(|schema| !schema.is_empty());

        TableName { schema, name }
    }
}

/// Splits `schema.table` into its parts, keeping dots inside quotes.
///
/// Parts are trimmed but keep their quotes.
pub fn split_table_name(name: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut start = 0;
    let mut closing = None;

    for (i, c) in name.char_indices() {
        match (closing, c) {
            (Some(close), c) if c == close => closing = None,
            (Some(_), _) => {}
            (None, '[') => closing = Some(']'),
            (None, '"') => closing = Some('"'),
            (None, '`') => closing = Some('`'),
            (None, '.') => {
                parts.push(name[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(name[start..].trim());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_schema_qualified_names() {
        assert_eq!(split_table_name("Person"), ["Person"]);
        assert_eq!(split_table_name("dbo.Person"), ["dbo", "Person"]);
        assert_eq!(split_table_name("[dbo].[Per.son]"), ["[dbo]", "[Per.son]"]);
    }

    #[test]
    fn parse_unquotes_parts() {
        assert_eq!(
            TableName::parse("[dbo].[Person]"),
            TableName {
                schema: Some("dbo"),
                name: "Person"
            }
        );
        assert_eq!(
            TableName::parse("\"public\".\"Per.son\""),
            TableName {
                schema: Some("public"),
                name: "Per.son"
            }
        );
        assert_eq!(
            TableName::parse("Person"),
            TableName {
                schema: None,
                name: "Person"
            }
        );
        assert_eq!(
            TableName::parse("Sales.dbo.Person"),
            TableName {
                schema: Some("dbo"),
                name: "Person"
            }
        );
    }
}
