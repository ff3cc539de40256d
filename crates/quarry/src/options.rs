use quarry_core::{Error, Result};

use serde::Deserialize;

/// Settings that change how predicates compile.
///
/// Options belong to a [`Db`](crate::Db); two databases in the same process
/// may use different settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub null_semantics: NullSemantics,

    /// Rewrites `!=` against a nullable column so that rows holding `NULL`
    /// match. Only applies with [`NullSemantics::SqlNull`].
    ///
    /// Any nullable column is rewritten, whatever its type, not only boolean
    /// ones: `x.Name != "a"` becomes `NOT ([Name] = @Name AND [Name] IS NOT NULL)`.
    pub boolean_not_equals: bool,

    /// How enum values are bound when the target column's type is unknown.
    pub enum_encoding: EnumEncoding,
}

/// How comparisons treat `NULL`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullSemantics {
    /// Comparisons follow SQL three-valued logic.
    #[default]
    SqlNull,

    /// Every comparison is guarded so it never yields `NULL`: positive
    /// comparisons exclude `NULL` rows and negative ones include them.
    NullNotEqual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumEncoding {
    /// Bind the variant name.
    #[default]
    String,

    /// Bind the discriminant.
    Number,
}

impl Options {
    /// Loads options from a JSON document. Missing keys keep their defaults.
    ///
    /// ```
    /// use quarry::{NullSemantics, Options};
    ///
    /// let options = Options::from_json(r#"{ "null_semantics": "null_not_equal" }"#).unwrap();
    /// assert_eq!(options.null_semantics, NullSemantics::NullNotEqual);
    /// assert!(!options.boolean_not_equals);
    /// ```
    pub fn from_json(json: &str) -> Result<Options> {
        serde_json::from_str(json)
            .map_err(|err| Error::invalid_configuration(format!("invalid options: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.null_semantics, NullSemantics::SqlNull);
        assert!(!options.boolean_not_equals);
        assert_eq!(options.enum_encoding, EnumEncoding::String);
    }

    #[test]
    fn from_json_reads_every_key() {
        let options = Options::from_json(
            r#"{
                "null_semantics": "null_not_equal",
                "boolean_not_equals": true,
                "enum_encoding": "number"
            }"#,
        )
        .unwrap();

        assert_eq!(
            options,
            Options {
                null_semantics: NullSemantics::NullNotEqual,
                boolean_not_equals: true,
                enum_encoding: EnumEncoding::Number,
            }
        );
    }

    #[test]
    fn from_json_rejects_unknown_values() {
        let err = Options::from_json(r#"{ "null_semantics": "maybe" }"#).unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = Options::from_json(r#"{ "null_semantic": "sql_null" }"#).unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
