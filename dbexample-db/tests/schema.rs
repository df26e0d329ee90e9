use dbexample_db::schema::create_schema;
use dbexample_db::{DbError, connect, create_database, open_memory};

#[test]
fn employee_table_exists_in_memory() {
    let conn = open_memory().unwrap();
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='Employee')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn created_database_is_reachable_through_gateway() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lesson22.db");
    create_database(&path).unwrap();

    let conn = connect(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Employee", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn create_database_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("lesson22.db");
    let err = create_database(&path).unwrap_err();
    assert!(matches!(err, DbError::Connectivity { .. }));
}
