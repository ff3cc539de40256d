use quarry::{
    driver::Row,
    expr::Expr,
    query::{Parameter, Value},
    CancellationToken, Connection, Db, Dialect, Driver, Entity, EntityMeta, Error, Property,
    Result, Type,
};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::{
    borrow::Cow,
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};

/// A driver whose catalog queries answer from a script.
#[derive(Debug, Clone)]
struct MockDriver {
    url: String,
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    /// Answers for successive queries. Once exhausted, queries never return.
    script: VecDeque<Result<Vec<Row>>>,

    /// Parameters of every query received.
    calls: Vec<Vec<Parameter>>,
}

#[derive(Debug)]
struct MockConnection {
    state: Arc<Mutex<State>>,
}

impl MockDriver {
    fn new(script: impl IntoIterator<Item = Result<Vec<Row>>>) -> MockDriver {
        MockDriver {
            url: format!("mock://{}", uuid::Uuid::new_v4()),
            state: Arc::new(Mutex::new(State {
                script: script.into_iter().collect(),
                calls: vec![],
            })),
        }
    }

    fn calls(&self) -> Vec<Vec<Parameter>> {
        self.state.lock().unwrap().calls.clone()
    }

    fn db(&self) -> Db {
        Db::builder().build(self.clone())
    }
}

#[async_trait]
impl Driver for MockDriver {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.url)
    }

    fn dialect(&self) -> Dialect {
        Dialect::SqlServer
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(MockConnection {
            state: self.state.clone(),
        }))
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn query(&mut self, _sql: &str, params: &[Parameter]) -> Result<Vec<Row>> {
        let answer = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(params.to_vec());
            state.script.pop_front()
        };

        match answer {
            Some(answer) => answer,
            None => std::future::pending().await,
        }
    }

    async fn execute(&mut self, _sql: &str, _params: &[Parameter]) -> Result<u64> {
        unimplemented!()
    }
}

/// One catalog row: name, primary, identity, nullable, type, size,
/// precision, scale, default, computed.
fn column(name: &str, native_type: &str, primary: bool, identity: bool, nullable: bool) -> Row {
    Row::from_vec(vec![
        Value::from(name),
        Value::Bool(primary),
        Value::Bool(identity),
        Value::Bool(nullable),
        Value::from(native_type),
        Value::Null,
        Value::Null,
        Value::Null,
        Value::Bool(false),
        Value::Bool(false),
    ])
}

fn person() -> Vec<Row> {
    vec![
        column("Id", "int", true, true, false),
        column("Name", "nvarchar", false, false, true),
        column("Level", "int", false, false, true),
    ]
}

fn busy() -> Error {
    Error::connection_busy(io::Error::new(io::ErrorKind::WouldBlock, "busy"))
}

#[tokio::test]
async fn decodes_catalog_rows() {
    let driver = MockDriver::new([Ok(person())]);

    let fields = driver.db().db_fields("Person").await.unwrap();

    assert_eq!(fields.len(), 3);

    let id = fields.get("Id").unwrap();
    assert!(id.is_primary);
    assert!(id.is_identity);
    assert!(!id.is_nullable);
    assert_eq!(id.ty, Type::I32);
    assert_eq!(id.native_type, "int");
    assert_eq!(id.provider, Dialect::SqlServer);

    assert_eq!(fields.get("name").unwrap().ty, Type::String);
    assert_eq!(fields.identity().map(|f| f.name.as_str()), Some("Id"));
}

#[tokio::test]
async fn second_call_is_served_from_cache() {
    let driver = MockDriver::new([Ok(person())]);
    let db = driver.db();

    let first = db.db_fields("Person").await.unwrap();
    let second = db.db_fields("Person").await.unwrap();
    let third = db.db_fields("PERSON").await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert_eq!(driver.calls().len(), 1);
}

#[tokio::test]
async fn cache_is_keyed_by_url() {
    let a = MockDriver::new([Ok(person())]);
    let b = MockDriver::new([Ok(vec![column("Id", "bigint", true, false, false)])]);

    let from_a = a.db().db_fields("Person").await.unwrap();
    let from_b = b.db().db_fields("Person").await.unwrap();

    assert_eq!(from_a.len(), 3);
    assert_eq!(from_b.len(), 1);
    assert_eq!(from_b.get("Id").unwrap().ty, Type::I64);
}

#[tokio::test]
async fn binds_schema_and_table() {
    let driver = MockDriver::new([Ok(person()), Ok(person())]);
    let db = driver.db();

    db.db_fields("Person").await.unwrap();
    db.db_fields("[sales].[Order]").await.unwrap();

    let calls = driver.calls();
    assert_eq!(
        calls[0],
        [
            Parameter::new("Schema", "dbo"),
            Parameter::new("TableName", "Person"),
        ]
    );
    assert_eq!(
        calls[1],
        [
            Parameter::new("Schema", "sales"),
            Parameter::new("TableName", "Order"),
        ]
    );
}

#[tokio::test]
async fn retries_once_when_busy() {
    let driver = MockDriver::new([Err(busy()), Ok(person())]);

    let fields = driver.db().db_fields("Person").await.unwrap();

    assert_eq!(fields.len(), 3);
    assert_eq!(driver.calls().len(), 2);
}

#[tokio::test]
async fn gives_up_after_one_retry() {
    let driver = MockDriver::new([Err(busy()), Err(busy()), Ok(person())]);

    let err = driver.db().db_fields("Person").await.unwrap_err();

    assert!(err.root().is_connection_busy());
    assert_eq!(driver.calls().len(), 2);
}

#[tokio::test]
async fn other_errors_are_not_retried() {
    let failure = io::Error::other("syntax error");
    let driver = MockDriver::new([Err(Error::driver_operation_failed(failure)), Ok(person())]);

    let err = driver.db().db_fields("Person").await.unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert_eq!(driver.calls().len(), 1);
}

#[tokio::test]
async fn missing_table_is_not_found_and_not_cached() {
    let driver = MockDriver::new([Ok(vec![]), Ok(person())]);
    let db = driver.db();

    let err = db.db_fields("Person").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "not found: no columns found for table `Person`");

    assert_eq!(db.db_fields("Person").await.unwrap().len(), 3);
    assert_eq!(driver.calls().len(), 2);
}

#[tokio::test]
async fn empty_table_name() {
    let driver = MockDriver::new([]);

    let err = driver.db().db_fields("  ").await.unwrap_err();

    assert!(err.is_invalid_configuration());
    assert!(driver.calls().is_empty());
}

#[tokio::test]
async fn cancelled_before_start() {
    let driver = MockDriver::new([Ok(person())]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = driver
        .db()
        .db_fields_with_cancel("Person", &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(driver.calls().is_empty());
}

#[tokio::test]
async fn cancelled_while_querying() {
    // empty script: the catalog query never completes
    let driver = MockDriver::new([]);
    let db = driver.db();
    let cancel = CancellationToken::new();

    let task = tokio::spawn({
        let cancel = cancel.clone();
        async move { db.db_fields_with_cancel("Person", &cancel).await }
    });

    while driver.calls().is_empty() {
        tokio::task::yield_now().await;
    }
    cancel.cancel();

    let err = task.await.unwrap().unwrap_err();
    assert!(err.is_cancelled());
}

struct Person;

impl Entity for Person {
    fn describe() -> EntityMeta {
        EntityMeta::new("Person", "ResolverPerson")
            .property(Property::new("Key", Type::String).column("Name").primary())
            .property(Property::new("Id", Type::I32))
            .property(Property::new("Level", Type::Enum).nullable())
    }
}

#[tokio::test]
async fn entity_keys_override_catalog() {
    let driver = MockDriver::new([Ok(person())]);

    let fields = driver.db().db_fields_for::<Person>().await.unwrap();

    assert!(fields.get("Name").unwrap().is_primary);
    assert!(!fields.get("Id").unwrap().is_primary);

    // no identity declared on the entity: the catalog's stands
    assert!(fields.get("Id").unwrap().is_identity);
}

#[tokio::test]
async fn compile_with_schema_encodes_enums_by_column() {
    let driver = MockDriver::new([Ok(person())]);
    let db = driver.db();

    let group = db
        .compile_with_schema::<Person>(&Expr::eq(
            Expr::field("Level"),
            Value::enumeration("High", 2),
        ))
        .await
        .unwrap();
    assert_eq!(group.fields()[0].value(), &Value::I64(2));

    let group = db
        .compile::<Person>(&Expr::eq(Expr::field("Level"), Value::enumeration("High", 2)))
        .unwrap();
    assert_eq!(group.fields()[0].value(), &Value::from("High"));
}
