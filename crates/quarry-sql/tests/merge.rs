use pretty_assertions::assert_eq;
use quarry_core::{
    schema::{DbField, DbFieldCollection},
    Dialect,
};
use quarry_sql::{
    stmt::{Merge, MergeAll, Parameter, Type},
    Serializer, Statement,
};

use std::sync::Arc;

fn serialize(serializer: Serializer, stmt: impl Into<Statement>) -> String {
    let mut params: Vec<Parameter> = vec![];
    serializer.serialize(&stmt.into(), &mut params).unwrap()
}

fn person() -> Arc<DbFieldCollection> {
    Arc::new(DbFieldCollection::new([
        DbField {
            is_primary: true,
            is_identity: true,
            is_nullable: false,
            ..DbField::new("Id", Type::I64, Dialect::SqlServer)
        },
        DbField::new("Name", Type::String, Dialect::SqlServer),
        DbField::new("Age", Type::I32, Dialect::SqlServer),
    ]))
}

#[test]
fn sql_server_merge() {
    let stmt = Merge::new("Person", ["Id", "Name", "Age"]).db_fields(person());

    assert_eq!(
        serialize(Serializer::sql_server(), stmt),
        "MERGE [Person] AS T USING (SELECT @Id AS [Id], @Name AS [Name], @Age AS [Age]) AS S \
         ON (S.[Id] = T.[Id]) \
         WHEN MATCHED THEN UPDATE SET T.[Name] = S.[Name], T.[Age] = S.[Age] \
         WHEN NOT MATCHED THEN INSERT ([Name], [Age]) VALUES (S.[Name], S.[Age]) \
         OUTPUT INSERTED.[Id] AS [Result];"
    );
}

#[test]
fn sql_server_merge_with_hints() {
    let stmt = Merge::new("Person", ["Id", "Name"])
        .db_fields(person())
        .hints("WITH (HOLDLOCK)");

    assert_eq!(
        serialize(Serializer::sql_server(), stmt),
        "MERGE [Person] WITH (HOLDLOCK) AS T USING (SELECT @Id AS [Id], @Name AS [Name]) AS S \
         ON (S.[Id] = T.[Id]) \
         WHEN MATCHED THEN UPDATE SET T.[Name] = S.[Name] \
         WHEN NOT MATCHED THEN INSERT ([Name]) VALUES (S.[Name]) \
         OUTPUT INSERTED.[Id] AS [Result];"
    );
}

#[test]
fn on_conflict_merge() {
    let stmt = Merge::new("Person", ["Id", "Name", "Age"]).db_fields(person());

    assert_eq!(
        serialize(Serializer::postgresql(), stmt),
        r#"INSERT INTO "Person" ("Id", "Name", "Age") VALUES (@Id, @Name, @Age) ON CONFLICT ("Id") DO UPDATE SET "Name" = EXCLUDED."Name", "Age" = EXCLUDED."Age" RETURNING "Id" AS "Result";"#
    );
}

#[test]
fn on_conflict_merge_leaves_identity_out_unless_qualifier() {
    let stmt = Merge::new("Person", ["Id", "Name", "Age"])
        .qualifiers(["Name"])
        .db_fields(person());

    assert_eq!(
        serialize(Serializer::postgresql(), stmt),
        r#"INSERT INTO "Person" ("Name", "Age") VALUES (@Name, @Age) ON CONFLICT ("Name") DO UPDATE SET "Age" = EXCLUDED."Age" RETURNING "Id" AS "Result";"#
    );
}

#[test]
fn on_conflict_merge_without_updates() {
    let stmt = Merge::new("Tag", ["Name"]).qualifiers(["Name"]);

    assert_eq!(
        serialize(Serializer::sqlite(), stmt),
        "INSERT INTO [Tag] ([Name]) VALUES (@Name) ON CONFLICT ([Name]) DO NOTHING RETURNING [Name] AS [Result]"
    );
}

#[test]
fn on_duplicate_key_merge() {
    let stmt = Merge::new("Person", ["Id", "Name", "Age"]).db_fields(person());

    assert_eq!(
        serialize(Serializer::mysql(), stmt),
        "INSERT INTO `Person` (`Id`, `Name`, `Age`) VALUES (@Id, @Name, @Age) \
         ON DUPLICATE KEY UPDATE `Id` = LAST_INSERT_ID(`Id`), `Name` = VALUES(`Name`), `Age` = VALUES(`Age`); \
         SELECT LAST_INSERT_ID() AS `Result`;"
    );
}

#[test]
fn merge_all_single_statement() {
    let stmt = MergeAll::new("Person", ["Id", "Name"], 2).db_fields(person());

    assert_eq!(
        serialize(Serializer::sqlite(), stmt),
        "INSERT INTO [Person] ([Id], [Name]) VALUES (@Id, @Name), (@Id_1, @Name_1) \
         ON CONFLICT ([Id]) DO UPDATE SET [Name] = EXCLUDED.[Name] RETURNING [Id] AS [Result]"
    );
}

#[test]
fn merge_all_repeats_statements() {
    let stmt = MergeAll::new("Person", ["Id", "Name"], 2).db_fields(person());

    assert_eq!(
        serialize(Serializer::postgresql(), stmt),
        r#"INSERT INTO "Person" ("Id", "Name") VALUES (@Id, @Name) ON CONFLICT ("Id") DO UPDATE SET "Name" = EXCLUDED."Name" RETURNING "Id" AS "Result"; INSERT INTO "Person" ("Id", "Name") VALUES (@Id_1, @Name_1) ON CONFLICT ("Id") DO UPDATE SET "Name" = EXCLUDED."Name" RETURNING "Id" AS "Result";"#
    );
}

#[test]
fn merge_requires_qualifiers() {
    let err = Serializer::sql_server()
        .serialize(&Merge::new("Tag", ["Name"]).into(), &mut Vec::<Parameter>::new())
        .unwrap_err();

    assert!(err.is_invalid_configuration());
}

#[test]
fn merge_qualifiers_must_be_merged_fields() {
    let stmt = Merge::new("Person", ["Name"]).qualifiers(["Id"]);
    let err = Serializer::sql_server()
        .serialize(&stmt.into(), &mut Vec::<Parameter>::new())
        .unwrap_err();

    assert!(err.is_invalid_configuration());
}
