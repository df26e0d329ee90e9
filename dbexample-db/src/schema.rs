//! Employee table definition for fixtures.
//!
//! The CLI only ever works against an existing database; these helpers
//! exist so tests and demos can stand one up.

use std::path::Path;

use rusqlite::Connection;

use crate::error::DbError;

/// DDL for the `Employee` table.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Employee (
    EMPNO INTEGER NOT NULL PRIMARY KEY,
    ENAME TEXT NOT NULL,
    JOB_TITLE TEXT NOT NULL,
    DUPLICATE_EMPNO INTEGER REFERENCES Employee(EMPNO)
);
"#;

/// Create the Employee table if it doesn't exist.
///
/// Idempotent.
pub fn create_schema(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Create a database file at `path` holding an empty Employee table.
pub fn create_database(path: &Path) -> Result<(), DbError> {
    let conn = Connection::open(path).map_err(|source| DbError::Connectivity {
        path: path.to_path_buf(),
        source,
    })?;
    create_schema(&conn)?;
    crate::gateway::close(conn)
}

/// Open an in-memory database with the Employee table. Useful for testing.
pub fn open_memory() -> Result<Connection, DbError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}
