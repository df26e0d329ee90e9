use dbexample_db::{DbError, close, connect, create_database, driver};

#[test]
fn driver_initializes_once() {
    let first = driver().unwrap();
    let second = driver().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(first.version().starts_with('3'));
}

#[test]
fn missing_database_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.db");

    let err = connect(&path).unwrap_err();
    assert!(err.is_connectivity(), "unexpected error: {err}");
    assert!(err.to_string().contains("absent.db"));
    assert!(!path.exists());
}

#[test]
fn non_database_file_is_a_connectivity_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not a database\n".repeat(64)).unwrap();

    let err = connect(&path).unwrap_err();
    assert!(matches!(err, DbError::Connectivity { .. }));
}

#[test]
fn connections_enforce_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lesson22.db");
    create_database(&path).unwrap();

    let conn = connect(&path).unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);

    let err = conn
        .execute(
            "INSERT INTO Employee (EMPNO, ENAME, JOB_TITLE, DUPLICATE_EMPNO)
             VALUES (2, 'Ann', 'Clerk', 1)",
            [],
        )
        .unwrap_err();
    assert_eq!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::ConstraintViolation)
    );

    close(conn).unwrap();
}
