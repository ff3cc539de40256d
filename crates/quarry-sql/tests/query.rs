use pretty_assertions::assert_eq;
use quarry_sql::{
    stmt::{Aggregate, Count, Exists, Field, OrderField, Parameter, Query, QueryField, Truncate, Type, Value},
    Serializer, Statement,
};

fn serialize(serializer: Serializer, stmt: impl Into<Statement>) -> String {
    let mut params: Vec<Parameter> = vec![];
    serializer.serialize(&stmt.into(), &mut params).unwrap()
}

#[test]
fn query_with_filter_order_and_hints() {
    let stmt = Query::new("Person", ["Id", "Name"])
        .filter(QueryField::equal("Name", "Ada"))
        .order_by([OrderField::ascending("Id")])
        .hints("WITH (NOLOCK)");

    let mut params: Vec<Parameter> = vec![];
    let sql = Serializer::sql_server()
        .serialize(&stmt.into(), &mut params)
        .unwrap();

    assert_eq!(
        sql,
        "SELECT [Id], [Name] FROM [Person] WITH (NOLOCK) WHERE ([Name] = @Name) ORDER BY [Id] ASC;"
    );
    assert_eq!(params, [Parameter::new("Name", "Ada")]);
}

#[test]
fn query_without_filter() {
    assert_eq!(
        serialize(Serializer::postgresql(), Query::new("Person", ["Id"])),
        r#"SELECT "Id" FROM "Person";"#
    );
}

#[test]
fn query_quotes_schema_and_table_separately() {
    assert_eq!(
        serialize(Serializer::sql_server(), Query::new("dbo.Person", ["[Id]"])),
        "SELECT [Id] FROM [dbo].[Person];"
    );
}

#[test]
fn query_top() {
    let stmt = || {
        Query::new("Person", ["Id"])
            .order_by([OrderField::descending("Id")])
            .top(10)
    };

    assert_eq!(
        serialize(Serializer::sql_server(), stmt()),
        "SELECT TOP (10) [Id] FROM [Person] ORDER BY [Id] DESC;"
    );
    assert_eq!(
        serialize(Serializer::postgresql(), stmt()),
        r#"SELECT "Id" FROM "Person" ORDER BY "Id" DESC LIMIT 10;"#
    );
    assert_eq!(
        serialize(Serializer::mysql(), stmt()),
        "SELECT `Id` FROM `Person` ORDER BY `Id` DESC LIMIT 10;"
    );
    assert_eq!(
        serialize(Serializer::sqlite(), stmt()),
        "SELECT [Id] FROM [Person] ORDER BY [Id] DESC LIMIT 10"
    );
}

#[test]
fn count() {
    let stmt = || Count::new("Person").filter(QueryField::new("Age", quarry_sql::stmt::Operation::GreaterThan, 30));

    assert_eq!(
        serialize(Serializer::sql_server(), stmt()),
        "SELECT COUNT(*) AS [CountValue] FROM [Person] WHERE ([Age] > @Age);"
    );
    assert_eq!(
        serialize(Serializer::sql_server(), stmt().big()),
        "SELECT COUNT_BIG(*) AS [CountValue] FROM [Person] WHERE ([Age] > @Age);"
    );
    assert_eq!(
        serialize(Serializer::postgresql(), stmt().big()),
        r#"SELECT COUNT(*) AS "CountValue" FROM "Person" WHERE ("Age" > @Age);"#
    );
}

#[test]
fn exists() {
    let stmt = || Exists::new("Person").filter(QueryField::equal("Id", 1));

    assert_eq!(
        serialize(Serializer::sql_server(), stmt()),
        "SELECT TOP (1) 1 AS [ExistsValue] FROM [Person] WHERE ([Id] = @Id);"
    );
    assert_eq!(
        serialize(Serializer::postgresql(), stmt()),
        r#"SELECT 1 AS "ExistsValue" FROM "Person" WHERE ("Id" = @Id) LIMIT 1;"#
    );
    assert_eq!(
        serialize(Serializer::sqlite(), stmt()),
        "SELECT 1 AS [ExistsValue] FROM [Person] WHERE ([Id] = @Id) LIMIT 1"
    );
}

#[test]
fn average_widens_integer_columns() {
    let age = Field::typed("Age", Type::I32);

    assert_eq!(
        serialize(Serializer::sql_server(), Aggregate::average("Person", age.clone())),
        "SELECT AVG(CAST([Age] AS FLOAT)) AS [AverageValue] FROM [Person];"
    );
    assert_eq!(
        serialize(Serializer::postgresql(), Aggregate::average("Person", age.clone())),
        r#"SELECT AVG(CAST("Age" AS DOUBLE PRECISION)) AS "AverageValue" FROM "Person";"#
    );
    assert_eq!(
        serialize(Serializer::mysql(), Aggregate::average("Person", age)),
        "SELECT AVG(`Age`) AS `AverageValue` FROM `Person`;"
    );
}

#[test]
fn average_keeps_fractional_columns() {
    let salary = Field::typed("Salary", Type::F64);

    assert_eq!(
        serialize(Serializer::sql_server(), Aggregate::average("Person", salary)),
        "SELECT AVG([Salary]) AS [AverageValue] FROM [Person];"
    );
}

#[test]
fn other_aggregates() {
    let filter = QueryField::equal("Active", true);

    assert_eq!(
        serialize(Serializer::sql_server(), Aggregate::sum("Person", "Age").filter(filter.clone())),
        "SELECT SUM([Age]) AS [SumValue] FROM [Person] WHERE ([Active] = @Active);"
    );
    assert_eq!(
        serialize(Serializer::sql_server(), Aggregate::max("Person", "Age")),
        "SELECT MAX([Age]) AS [MaxValue] FROM [Person];"
    );
    assert_eq!(
        serialize(Serializer::sqlite(), Aggregate::min("Person", "Age").filter(filter)),
        "SELECT MIN([Age]) AS [MinValue] FROM [Person] WHERE ([Active] = @Active)"
    );
}

#[test]
fn truncate() {
    assert_eq!(
        serialize(Serializer::sql_server(), Truncate::new("Person")),
        "TRUNCATE TABLE [Person];"
    );
    assert_eq!(
        serialize(Serializer::sqlite(), Truncate::new("Person")),
        "DELETE FROM [Person]"
    );
}

#[test]
fn rendering_is_deterministic() {
    let stmt: Statement = Query::new("Person", ["Id"])
        .filter(QueryField::new("Id", quarry_sql::stmt::Operation::In, Value::list([1, 2])))
        .into();

    let render = || {
        let mut params: Vec<Parameter> = vec![];
        let sql = Serializer::sql_server().serialize(&stmt, &mut params).unwrap();
        (sql, params)
    };

    assert_eq!(render(), render());
}
