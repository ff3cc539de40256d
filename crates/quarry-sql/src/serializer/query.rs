use super::{
    clause::{Hints, OrderBy, OrderFields, Where},
    Comma, Formatter, Ident, TableName, ToSql,
};

use crate::stmt::{self, AggregateFunction, Field};

use quarry_core::driver::Paging;

impl ToSql for &stmt::Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let row_number = f.serializer.capability.paging == Paging::RowNumber;
        let top = self.top.filter(|_| row_number);
        let limit = self.top.filter(|_| !row_number);

        fmt!(f, "SELECT ");

        if let Some(top) = top {
            fmt!(f, "TOP (" top ") ");
        }

        fmt!(
            f,
            Comma(&self.fields) " FROM " TableName(&self.table) Hints(self.hints.as_deref())
            Where(self.filter.as_ref()) OrderBy(&self.order_by)
        );

        if let Some(limit) = limit {
            fmt!(f, " LIMIT " limit);
        }

        f.terminate();
    }
}

impl ToSql for &stmt::Count {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let function = if self.big && f.serializer.is_sql_server() {
            "COUNT_BIG"
        } else {
            "COUNT"
        };

        fmt!(
            f, "SELECT " function "(*) AS " Ident("CountValue") " FROM " TableName(&self.table)
            Hints(self.hints.as_deref()) Where(self.filter.as_ref())
        );
        f.terminate();
    }
}

impl ToSql for &stmt::Exists {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let row_number = f.serializer.capability.paging == Paging::RowNumber;
        let top = if row_number { "TOP (1) " } else { "" };

        fmt!(
            f, "SELECT " top "1 AS " Ident("ExistsValue") " FROM " TableName(&self.table)
            Hints(self.hints.as_deref()) Where(self.filter.as_ref())
        );

        if !row_number {
            fmt!(f, " LIMIT 1");
        }

        f.terminate();
    }
}

impl ToSql for &stmt::Aggregate {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let function = self.function;
        let column = Ident(&self.field.name);

        fmt!(f, "SELECT " function.name() "(");

        // Integer averages are truncated unless the column is widened first.
        let widening = f.serializer.capability.average_widening.filter(|_| {
            function == AggregateFunction::Average
                && self.field.ty.map_or(true, |ty| ty.is_integer() || ty.is_unknown())
        });

        match widening {
            Some(widening) => fmt!(f, "CAST(" column " AS " widening ")"),
            None => fmt!(f, column),
        }

        fmt!(
            f, ") AS " Ident(function.alias()) " FROM " TableName(&self.table)
            Hints(self.hints.as_deref()) Where(self.filter.as_ref())
        );
        f.terminate();
    }
}

impl ToSql for &stmt::Truncate {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if f.serializer.is_sqlite() {
            fmt!(f, "DELETE FROM " TableName(&self.table));
        } else {
            fmt!(f, "TRUNCATE TABLE " TableName(&self.table));
        }

        f.terminate();
    }
}

impl ToSql for &stmt::SkipQuery {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let fields = || Comma(&self.fields);
        let table = TableName(&self.table);
        let hints = Hints(self.hints.as_deref());
        let filter = Where(self.filter.as_ref());

        match f.serializer.capability.paging {
            Paging::RowNumber => {
                let (first, last) = match self.row_range() {
                    Ok(range) => range,
                    Err(err) => return f.fail(err),
                };

                // The outer `ORDER BY` reads from the CTE, so order columns
                // outside the projection are carried through it.
                let carried: Vec<Field> = self
                    .order_by
                    .iter()
                    .filter(|order| !self.fields.iter().any(|field| field.is_column(&order.name)))
                    .map(|order| Field::new(&order.name))
                    .collect();

                fmt!(
                    f, "WITH CTE AS (SELECT ROW_NUMBER() OVER (ORDER BY " OrderFields(&self.order_by)
                    ") AS " Ident("RowNumber") ", " fields()
                );

                if !carried.is_empty() {
                    fmt!(f, ", " Comma(&carried));
                }

                fmt!(
                    f, " FROM " table hints filter ") SELECT " fields() " FROM CTE WHERE ("
                    Ident("RowNumber") " BETWEEN " first " AND " last ")" OrderBy(&self.order_by)
                );
            }
            Paging::LimitOffset => {
                fmt!(
                    f, "SELECT " fields() " FROM " table hints filter OrderBy(&self.order_by)
                    " LIMIT " self.take " OFFSET " self.skip
                );
            }
        }

        f.terminate();
    }
}

impl ToSql for &stmt::BatchQuery {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.to_skip_query() {
            Ok(query) => query.to_sql(f),
            Err(err) => f.fail(err),
        }
    }
}
