use quarry::{
    expr::Expr,
    query::{Parameter, Value},
    stmt::Query,
    Db, Driver, Entity, EntityMeta, Property, Statement, Type,
};
use quarry_driver_sqlite::Sqlite;

use pretty_assertions::assert_eq;
use std::path::PathBuf;

struct Item;

impl Entity for Item {
    fn describe() -> EntityMeta {
        EntityMeta::new("Item", "Item")
            .property(Property::new("Id", Type::I64).primary().identity())
            .property(Property::new("Flag", Type::Enum).nullable())
    }
}

/// A database file seeded with one flagged and one unflagged item.
///
/// In-memory databases are per connection, so the file is shared between the
/// setup connection and the ones the resolver opens.
async fn seeded() -> PathBuf {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let path = std::env::temp_dir().join(format!("quarry-{}.db", uuid::Uuid::new_v4()));
    let driver = Sqlite::open(&path);

    let mut connection = driver.connect().await.unwrap();
    for sql in [
        "CREATE TABLE Item (Id INTEGER PRIMARY KEY, Flag TEXT NULL, Label VARCHAR(40) NOT NULL DEFAULT '', Price DECIMAL(10, 2))",
        "INSERT INTO Item (Id, Flag) VALUES (1, 'High')",
        "INSERT INTO Item (Id, Flag) VALUES (2, NULL)",
    ] {
        connection.execute(sql, &[]).await.unwrap();
    }

    path
}

async fn matching_ids(db: &Db, expr: &Expr) -> Vec<Value> {
    let filter = db.compile_with_schema::<Item>(expr).await.unwrap();
    let stmt = Statement::from(Query::new("Item", ["Id"]).filter(filter));

    let mut params = Vec::<Parameter>::new();
    let sql = db.serializer().serialize(&stmt, &mut params).unwrap();

    let mut connection = db.connect().await.unwrap();
    connection
        .query(&sql, &params)
        .await
        .unwrap()
        .into_iter()
        .flat_map(|row| row.into_values())
        .collect()
}

#[tokio::test]
async fn resolves_columns_from_pragma() {
    let path = seeded().await;
    let db = Db::builder().build(Sqlite::open(&path));

    let fields = db.db_fields("Item").await.unwrap();

    assert_eq!(
        fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        ["Id", "Flag", "Label", "Price"]
    );

    let id = fields.get("Id").unwrap();
    assert!(id.is_primary);
    assert!(id.is_identity);
    assert_eq!(id.ty, Type::I64);

    let flag = fields.get("Flag").unwrap();
    assert!(flag.is_nullable);
    assert_eq!(flag.ty, Type::String);

    let label = fields.get("Label").unwrap();
    assert!(!label.is_nullable);
    assert!(label.has_default_value);
    assert_eq!(label.size, Some(40));

    let price = fields.get("Price").unwrap();
    assert_eq!(price.ty, Type::Decimal);
    assert_eq!((price.precision, price.scale), (Some(10), Some(2)));

    // qualified with the default schema
    assert_eq!(db.db_fields("main.Item").await.unwrap().len(), 4);

    let err = db.db_fields("Missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn not_equal_skips_nulls_by_default() {
    let path = seeded().await;
    let db = Db::builder().build(Sqlite::open(&path));

    let expr = Expr::ne(Expr::field("Flag"), Value::enumeration("High", 2));

    assert!(matching_ids(&db, &expr).await.is_empty());
}

#[tokio::test]
async fn boolean_not_equals_includes_nulls() {
    let path = seeded().await;
    let db = Db::builder()
        .boolean_not_equals(true)
        .build(Sqlite::open(&path));

    let expr = Expr::ne(Expr::field("Flag"), Value::enumeration("High", 2));
    assert_eq!(matching_ids(&db, &expr).await, [Value::I64(2)]);

    let expr = Expr::eq(Expr::field("Flag"), Value::enumeration("High", 2));
    assert_eq!(matching_ids(&db, &expr).await, [Value::I64(1)]);
}
