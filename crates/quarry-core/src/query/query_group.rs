use super::{parameter::sanitize, Conjunction, QueryField, Value};

use std::collections::{HashMap, HashSet};

/// A composite predicate node.
///
/// Children keep their order. The group renders as
/// `(child1 <conjunction> child2 ...)`, prefixed with `NOT ` when `is_not` is
/// set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGroup {
    pub children: Vec<QueryNode>,
    pub conjunction: Conjunction,
    pub is_not: bool,
}

/// A child of a [`QueryGroup`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    Field(QueryField),
    Group(QueryGroup),
}

impl QueryGroup {
    pub fn new(children: impl IntoIterator<Item = impl Into<QueryNode>>, conjunction: Conjunction) -> QueryGroup {
        QueryGroup {
            children: children.into_iter().map(Into::into).collect(),
            conjunction,
            is_not: false,
        }
    }

    pub fn and(children: impl IntoIterator<Item = impl Into<QueryNode>>) -> QueryGroup {
        QueryGroup::new(children, Conjunction::And)
    }

    pub fn or(children: impl IntoIterator<Item = impl Into<QueryNode>>) -> QueryGroup {
        QueryGroup::new(children, Conjunction::Or)
    }

    /// Wraps the group in a new, negated group.
    pub fn not(self) -> QueryGroup {
        QueryGroup {
            children: vec![QueryNode::Group(self)],
            conjunction: Conjunction::And,
            is_not: true,
        }
    }

    /// Expands a flat key/value object into an `AND` of `=` fields.
    pub fn from_object<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> QueryGroup
    where
        K: Into<String>,
        V: Into<Value>,
    {
        QueryGroup::and(
            pairs
                .into_iter()
                .map(|(name, value)| QueryField::equal(name, value)),
        )
    }

    /// True when the group holds no field at any depth.
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(|child| match child {
            QueryNode::Field(_) => false,
            QueryNode::Group(group) => group.is_empty(),
        })
    }

    /// All fields, depth first, in document order.
    pub fn fields(&self) -> Vec<&QueryField> {
        let mut fields = vec![];
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields<'a>(&'a self, dst: &mut Vec<&'a QueryField>) {
        for child in &self.children {
            match child {
                QueryNode::Field(field) => dst.push(field),
                QueryNode::Group(group) => group.collect_fields(dst),
            }
        }
    }

    /// Visits every field, depth first, in document order.
    pub fn for_each_field_mut(&mut self, f: &mut impl FnMut(&mut QueryField)) {
        for child in &mut self.children {
            match child {
                QueryNode::Field(field) => f(field),
                QueryNode::Group(group) => group.for_each_field_mut(f),
            }
        }
    }

    /// Fields with duplicates removed, keeping the first occurrence.
    ///
    /// Duplicates are detected by field identity, which ignores values.
    pub fn distinct_fields(&self) -> Vec<&QueryField> {
        let mut seen = HashSet::new();
        self.fields()
            .into_iter()
            .filter(|field| seen.insert(*field))
            .collect()
    }

    /// True when a field with the same identity is present at any depth.
    pub fn contains(&self, field: &QueryField) -> bool {
        self.fields().into_iter().any(|existing| existing == field)
    }

    /// Assigns unique parameter names in document order.
    ///
    /// The first field bound to a column keeps the column's name; later ones
    /// get `_1`, `_2`, ... appended, skipping any name already assigned to
    /// another column. Null checks bind nothing and are skipped.
    pub fn fix_parameters(&mut self) {
        let mut taken = HashSet::<String>::new();
        let mut counts = HashMap::<String, usize>::new();

        self.for_each_field_mut(&mut |field| {
            if field.is_null_check() {
                return;
            }

            let base = sanitize(&field.field.name);
            let count = counts.entry(base.to_lowercase()).or_insert(0);

            loop {
                let name = match *count {
                    0 => base.clone(),
                    n => format!("{base}_{n}"),
                };
                *count += 1;

                if taken.insert(name.to_lowercase()) {
                    field.parameter.name = name;
                    break;
                }
            }
        });
    }

    /// Prepends `prefix` to every parameter name.
    pub fn prefix_parameters(&mut self, prefix: &str) {
        self.for_each_field_mut(&mut |field| {
            field.parameter.name.insert_str(0, prefix);
        });
    }
}

impl From<QueryField> for QueryGroup {
    fn from(field: QueryField) -> QueryGroup {
        QueryGroup::and([field])
    }
}

impl From<QueryField> for QueryNode {
    fn from(field: QueryField) -> QueryNode {
        QueryNode::Field(field)
    }
}

impl From<QueryGroup> for QueryNode {
    fn from(group: QueryGroup) -> QueryNode {
        QueryNode::Group(group)
    }
}
