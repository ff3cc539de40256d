use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{OrderField, QueryGroup};

/// ` WHERE <filter>`, omitted for a missing or empty filter.
pub(super) struct Where<'a>(pub(super) Option<&'a QueryGroup>);

/// ` ORDER BY <fields>`, omitted when there is no order.
pub(super) struct OrderBy<'a>(pub(super) &'a [OrderField]);

/// The order fields alone, as used inside `OVER (...)`.
pub(super) struct OrderFields<'a>(pub(super) &'a [OrderField]);

/// ` <hints>`, omitted without hints.
pub(super) struct Hints<'a>(pub(super) Option<&'a str>);

impl ToSql for Where<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(filter) = self.0.filter(|filter| !filter.is_empty()) {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for OrderBy<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.0.is_empty() {
            fmt!(f, " ORDER BY " OrderFields(self.0));
        }
    }
}

impl ToSql for OrderFields<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Comma(self.0));
    }
}

impl ToSql for &OrderField {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.name) " " self.order.text());
    }
}

impl ToSql for Hints<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(hints) = self.0.map(str::trim).filter(|hints| !hints.is_empty()) {
            fmt!(f, " " hints);
        }
    }
}
