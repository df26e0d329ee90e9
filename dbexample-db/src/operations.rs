//! Write operations on the Employee table.

use rusqlite::{Connection, params};

use crate::error::DbError;
use crate::types::Employee;

/// The two rows written by [`insert_with_duplicate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePair {
    pub original: Employee,
    pub duplicate: Employee,
}

// ── Transactions ────────────────────────────────────────────────────────────

/// Rolls back on drop unless the transaction was finished.
///
/// Covers a panicking body; the ordinary failure path rolls back
/// explicitly through [`RollbackGuard::rollback`].
struct RollbackGuard<'conn> {
    conn: &'conn Connection,
    active: bool,
}

impl<'conn> RollbackGuard<'conn> {
    fn begin(conn: &'conn Connection) -> Result<Self, DbError> {
        conn.execute_batch("BEGIN IMMEDIATE")?;
        log::debug!("Transaction started");
        Ok(Self { conn, active: true })
    }

    fn commit(mut self) -> Result<(), DbError> {
        match self.conn.execute_batch("COMMIT") {
            Ok(()) => {
                self.active = false;
                log::debug!("Transaction committed");
                Ok(())
            }
            Err(e) => {
                // SQLite keeps the transaction open after a failed COMMIT.
                let e = DbError::from(e);
                self.rollback(&e);
                Err(e)
            }
        }
    }

    /// Roll back after `cause`. A failing rollback is logged, never returned.
    fn rollback(mut self, cause: &DbError) {
        self.active = false;
        log::info!("Rolling back transaction after error: {}", cause);
        if let Err(e) = rollback(self.conn) {
            log::warn!("{}", e);
        }
    }
}

impl Drop for RollbackGuard<'_> {
    fn drop(&mut self) {
        if self.active {
            log::warn!("Transaction abandoned mid-flight; rolling back");
            if let Err(e) = rollback(self.conn) {
                log::warn!("{}", e);
            }
        }
    }
}

fn rollback(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch("ROLLBACK").map_err(DbError::Rollback)
}

/// Run `body` inside a transaction.
///
/// Commits when `body` succeeds. When `body` or the commit fails, the
/// transaction is rolled back and the original error is returned, even if
/// the rollback itself reports an error (SQLite does so, for instance,
/// when an `ON CONFLICT ROLLBACK` constraint has already ended the
/// transaction). A panic in `body` also rolls back.
pub fn in_transaction<T, F>(conn: &Connection, body: F) -> Result<T, DbError>
where
    F: FnOnce(&Connection) -> Result<T, DbError>,
{
    let guard = RollbackGuard::begin(conn)?;

    let value = match body(conn) {
        Ok(value) => value,
        Err(e) => {
            guard.rollback(&e);
            return Err(e);
        }
    };

    guard.commit()?;
    Ok(value)
}

// ── Employee Operations ─────────────────────────────────────────────────────

/// Insert a single employee row.
pub fn insert_employee(conn: &Connection, employee: &Employee) -> Result<(), DbError> {
    conn.execute(
        "INSERT INTO Employee (EMPNO, ENAME, JOB_TITLE, DUPLICATE_EMPNO)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            employee.empno,
            employee.ename,
            employee.job_title,
            employee.duplicate_empno,
        ],
    )?;
    Ok(())
}

/// Insert an employee plus a duplicate row (EMPNO + 1, DUPLICATE_EMPNO
/// pointing at the original) in one transaction.
///
/// Either both rows become visible or neither does.
pub fn insert_with_duplicate(
    conn: &Connection,
    empno: i32,
    ename: &str,
    job_title: &str,
) -> Result<DuplicatePair, DbError> {
    let original = Employee::new(empno, ename, job_title);
    let duplicate = original
        .duplicate()
        .ok_or(DbError::EmpnoOutOfRange(empno))?;

    in_transaction(conn, |conn| {
        insert_employee(conn, &original)?;
        insert_employee(conn, &duplicate)?;
        Ok(())
    })?;

    log::info!(
        "Inserted EMPNO {} with duplicate EMPNO {}",
        original.empno,
        duplicate.empno,
    );
    Ok(DuplicatePair {
        original,
        duplicate,
    })
}
