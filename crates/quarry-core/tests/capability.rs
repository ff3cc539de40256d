use quarry_core::{
    driver::{IdentityRetrieval, Paging, Upsert},
    Dialect,
};

#[test]
fn sql_server_is_the_reference() {
    let cap = Dialect::SqlServer.capability();

    assert_eq!((cap.open_quote, cap.close_quote), ('[', ']'));
    assert!(cap.table_hints);
    assert_eq!(cap.max_parameters, 2100);
    assert_eq!(cap.paging, Paging::RowNumber);
    assert_eq!(cap.upsert, Upsert::Merge);
}

#[test]
fn only_sql_server_accepts_hints() {
    for dialect in [Dialect::PostgreSql, Dialect::MySql, Dialect::Sqlite] {
        assert!(!dialect.capability().table_hints, "{dialect}");
    }
}

#[test]
fn sqlite_runs_one_statement() {
    let cap = Dialect::Sqlite.capability();

    assert!(!cap.multiple_statements);
    assert!(!cap.statement_terminator);
    assert_eq!(cap.identity_retrieval, IdentityRetrieval::Returning);
    assert_eq!(cap.max_parameters, 999);
}

#[test]
fn postgresql_casts_mismatched_fields() {
    let cap = Dialect::PostgreSql.capability();

    assert!(cap.cast_mismatched_fields);
    assert_eq!(cap.open_quote, '"');
    assert_eq!(cap.average_widening, Some("DOUBLE PRECISION"));
}

#[test]
fn mysql_profile() {
    let cap = Dialect::MySql.capability();

    assert_eq!(cap.open_quote, '`');
    assert!(!cap.directional_parameters);
    assert_eq!(cap.upsert, Upsert::OnDuplicateKey);
    assert_eq!(cap.identity_retrieval, IdentityRetrieval::Query("LAST_INSERT_ID()"));
}
