use super::{ty, Binding, Comma, Delimited, Formatter, Ident, ToSql};

use crate::stmt::{Operation, QueryField, QueryGroup, QueryNode, Type, Value};

impl ToSql for &QueryGroup {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let children = self.children.iter().filter(|child| !is_empty(child));
        let prefix = if self.is_not { "NOT " } else { "" };

        fmt!(f, prefix "(" Delimited(children, self.conjunction.separator()) ")");
    }
}

impl ToSql for &QueryNode {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            QueryNode::Field(field) => field.to_sql(f),
            QueryNode::Group(group) => group.to_sql(f),
        }
    }
}

impl ToSql for &QueryField {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.is_null_check() {
            let check = if self.operation.is_eq() {
                " IS NULL"
            } else {
                " IS NOT NULL"
            };
            fmt!(f, Column(self) check);
            return;
        }

        let mut bindings = match self.bindings() {
            Ok(bindings) => bindings,
            Err(err) => {
                f.fail(err);
                return;
            }
        };

        match self.operation {
            // An empty list matches nothing, or everything when negated.
            Operation::In if bindings.is_empty() => fmt!(f, "1 = 0"),
            Operation::NotIn if bindings.is_empty() => fmt!(f, "1 = 1"),
            op if op.is_list() => {
                fmt!(f, Column(self) " " op.text() " (" Comma(bindings.into_iter().map(Binding)) ")");
            }
            op if op.is_range() => {
                let right = bindings.pop();
                let left = bindings.pop();
                fmt!(f, Column(self) " " op.text() " " left.map(Binding) " AND " right.map(Binding));
            }
            op => {
                fmt!(f, Column(self) " " op.text() " " bindings.pop().map(Binding));
            }
        }
    }
}

/// The column side of a comparison, cast to the value's type where the
/// dialect sends values untyped.
struct Column<'a>(&'a QueryField);

impl ToSql for Column<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = Ident(&self.0.field.name);

        match mismatched_type(self.0).filter(|_| f.serializer.capability.cast_mismatched_fields) {
            Some(cast) => fmt!(f, "CAST(" column " AS " cast ")"),
            None => fmt!(f, column),
        }
    }
}

fn mismatched_type(field: &QueryField) -> Option<&'static str> {
    let declared = field.field.ty.filter(|ty| !ty.is_enum() && !ty.is_unknown())?;
    let bound = match &field.parameter.value {
        Value::List(items) => items.first().map(Value::ty).unwrap_or(Type::Unknown),
        _ => field.parameter.ty(),
    };

    if bound == declared || bound.is_unknown() {
        return None;
    }

    ty::cast_type(bound)
}

fn is_empty(node: &QueryNode) -> bool {
    match node {
        QueryNode::Field(_) => false,
        QueryNode::Group(group) => group.is_empty(),
    }
}
