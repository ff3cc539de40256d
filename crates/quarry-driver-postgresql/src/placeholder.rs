//! Rewrites named `@name` placeholders into PostgreSQL's positional `$n`.

use super::Value;

use quarry_core::{query::Parameter, Error, Result};

/// Returns the rewritten SQL and the values in positional order.
///
/// A name referenced more than once reuses its position. Text inside string
/// literals and quoted identifiers is left untouched.
pub(crate) fn rewrite(sql: &str, params: &[Parameter]) -> Result<(String, Vec<Value>)> {
    let mut dst = String::with_capacity(sql.len());
    let mut names: Vec<&str> = vec![];
    let mut values = vec![];
    let mut quote = None;
    let mut chars = sql.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match (quote, c) {
            (Some(close), c) => {
                if c == close {
                    quote = None;
                }
            }
            (None, '\'' | '"') => quote = Some(c),
            (None, '@') if chars.peek().is_some_and(|(_, c)| is_name_start(*c)) => {
                let mut end = sql.len();

                while let Some((i, c)) = chars.peek().copied() {
                    if !is_name_char(c) {
                        end = i;
                        break;
                    }
                    chars.next();
                }

                let name = &sql[start + 1..end];

                let position = match names.iter().position(|existing| *existing == name) {
                    Some(position) => position,
                    None => {
                        let param = find(params, name)?;
                        names.push(name);
                        values.push(Value::from(param.value.clone()));
                        names.len() - 1
                    }
                };

                dst.push('$');
                dst.push_str(&(position + 1).to_string());
                continue;
            }
            _ => {}
        }

        dst.push(c);
    }

    Ok((dst, values))
}

fn find<'a>(params: &'a [Parameter], name: &str) -> Result<&'a Parameter> {
    params
        .iter()
        .find(|param| param.name == name)
        .or_else(|| params.iter().find(|param| param.name.eq_ignore_ascii_case(name)))
        .ok_or_else(|| {
            Error::invalid_configuration(format!("no value bound for parameter `@{name}`"))
        })
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Vec<Parameter> {
        vec![Parameter::new("Name", "a"), Parameter::new("Id", 1_i64)]
    }

    #[test]
    fn positions_follow_first_reference() {
        let (sql, values) = rewrite(
            "SELECT \"Id\" FROM \"Person\" WHERE (\"Id\" = @Id AND \"Name\" = @Name)",
            &params(),
        )
        .unwrap();

        assert_eq!(
            sql,
            "SELECT \"Id\" FROM \"Person\" WHERE (\"Id\" = $1 AND \"Name\" = $2)"
        );
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn repeated_names_share_a_position() {
        let (sql, values) = rewrite("SELECT @Id, @Id + 1", &params()).unwrap();

        assert_eq!(sql, "SELECT $1, $1 + 1");
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn literals_are_untouched() {
        let (sql, values) = rewrite("SELECT '@Id', \"@Name\", @Name", &params()).unwrap();

        assert_eq!(sql, "SELECT '@Id', \"@Name\", $1");
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn name_at_end_of_text() {
        let (sql, _) = rewrite("SELECT @Name", &params()).unwrap();
        assert_eq!(sql, "SELECT $1");
    }

    #[test]
    fn missing_parameter() {
        let err = rewrite("SELECT @Missing", &params()).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn bare_at_sign_is_kept() {
        let (sql, values) = rewrite("SELECT @ -5", &params()).unwrap();

        assert_eq!(sql, "SELECT @ -5");
        assert!(values.is_empty());
    }
}
