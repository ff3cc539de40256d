use quarry_core::query::{Conjunction, QueryField, QueryGroup, QueryNode, Value};

#[test]
fn from_object_builds_flat_and() {
    let group = QueryGroup::from_object([("Id", Value::from(10)), ("Name", Value::from("Ada"))]);

    assert_eq!(group.conjunction, Conjunction::And);
    assert!(!group.is_not);
    assert_eq!(group.children.len(), 2);

    let names: Vec<_> = group.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["Id", "Name"]);
}

#[test]
fn fix_parameters_suffixes_repeated_columns() {
    let mut group = QueryGroup::or([
        QueryGroup::and([QueryField::equal("Id", 1)]),
        QueryGroup::and([QueryField::equal("Id", 2), QueryField::equal("Name", "a")]),
        QueryGroup::and([QueryField::equal("id", 3)]),
    ]);

    group.fix_parameters();

    let names: Vec<_> = group
        .fields()
        .iter()
        .map(|f| f.parameter.name.as_str())
        .collect();
    assert_eq!(names, ["Id", "Id_1", "Name", "id_2"]);
}

#[test]
fn fix_parameters_skips_names_of_other_columns() {
    let names = |mut group: QueryGroup| {
        group.fix_parameters();
        group
            .fields()
            .iter()
            .map(|f| f.parameter.name.clone())
            .collect::<Vec<_>>()
    };

    let group = QueryGroup::or([
        QueryField::equal("N", 1),
        QueryField::equal("N", 2),
        QueryField::equal("N_1", 3),
    ]);
    assert_eq!(names(group), ["N", "N_1", "N_1_1"]);

    let group = QueryGroup::or([
        QueryField::equal("N_1", 3),
        QueryField::equal("N", 1),
        QueryField::equal("N", 2),
    ]);
    assert_eq!(names(group), ["N_1", "N", "N_2"]);
}

#[test]
fn fix_parameters_skips_null_checks() {
    let mut group = QueryGroup::and([
        QueryField::is_not_null("Email"),
        QueryField::equal("Email", "a@b.c"),
    ]);

    group.fix_parameters();

    assert_eq!(group.fields()[1].parameter.name, "Email");
}

#[test]
fn prefix_parameters() {
    let mut group = QueryGroup::from(QueryField::equal("Id", 1));
    group.prefix_parameters("_");

    assert_eq!(group.fields()[0].parameter.name, "_Id");
}

#[test]
fn distinct_fields_keep_first_occurrence() {
    let group = QueryGroup::and([
        QueryField::equal("Id", 1),
        QueryField::equal("Id", 2),
        QueryField::equal("Name", "a"),
    ]);

    let distinct = group.distinct_fields();
    assert_eq!(distinct.len(), 2);
    assert_eq!(distinct[0].value(), &Value::I32(1));
    assert!(group.contains(&QueryField::equal("Name", "z")));
}

#[test]
fn not_wraps_in_negated_group() {
    let group = QueryGroup::from(QueryField::equal("Id", 1)).not();

    assert!(group.is_not);
    assert!(matches!(&group.children[..], [QueryNode::Group(inner)] if !inner.is_not));
}

#[test]
fn empty_groups() {
    assert!(QueryGroup::default().is_empty());
    assert!(QueryGroup::and([QueryGroup::default()]).is_empty());
    assert!(!QueryGroup::from(QueryField::is_null("A")).is_empty());
}
