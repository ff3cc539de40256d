use quarry_core::{
    query::Type,
    schema::{DbField, DbFieldCollection, EntityMeta, Property},
    Dialect,
};

fn column(name: &str, ty: Type) -> DbField {
    DbField::new(name, ty, Dialect::SqlServer)
}

fn person() -> DbFieldCollection {
    DbFieldCollection::new([
        DbField {
            is_primary: true,
            is_identity: true,
            is_nullable: false,
            ..column("Id", Type::I64)
        },
        column("Name", Type::String),
        column("Age", Type::I32),
    ])
}

#[test]
fn lookups_ignore_case_and_quotes() {
    let fields = person();

    assert_eq!(fields.len(), 3);
    assert!(fields.get("name").is_some());
    assert!(fields.get("[NAME]").is_some());
    assert!(fields.get("\"Age\"").is_some());
    assert!(fields.get("Missing").is_none());
}

#[test]
fn keeps_catalog_order() {
    let names: Vec<_> = person().iter().map(|f| f.name.clone()).collect();
    assert_eq!(names, ["Id", "Name", "Age"]);
}

#[test]
fn derives_identity_and_primaries() {
    let fields = person();

    assert_eq!(fields.identity().map(|f| f.name.as_str()), Some("Id"));
    assert_eq!(fields.primary().map(|f| f.name.as_str()), Some("Id"));
}

#[test]
fn composite_primary_key() {
    let primary = |name| DbField {
        is_primary: true,
        ..column(name, Type::I32)
    };
    let fields = DbFieldCollection::new([primary("OrderId"), primary("LineNo"), column("Qty", Type::I32)]);

    let primaries: Vec<_> = fields.primaries().map(|f| f.name.as_str()).collect();
    assert_eq!(primaries, ["OrderId", "LineNo"]);
    assert!(fields.identity().is_none());
}

#[test]
fn entity_markers_override_catalog() {
    let entity = EntityMeta::new("Person", "Person")
        .property(Property::new("Id", Type::I64))
        .property(Property::new("PersonName", Type::String).column("Name").primary());

    let fields = person().with_entity_keys(&entity);

    let primaries: Vec<_> = fields.primaries().map(|f| f.name.as_str()).collect();
    assert_eq!(primaries, ["Name"]);

    // Identity is not declared, so the catalog flag stands.
    assert_eq!(fields.identity().map(|f| f.name.as_str()), Some("Id"));
}

#[test]
fn catalog_flags_used_without_markers() {
    let entity = EntityMeta::new("Person", "Person").property(Property::new("Id", Type::I64));

    assert_eq!(person().with_entity_keys(&entity), person());
}
