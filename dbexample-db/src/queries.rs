//! Read queries over the Employee table.
//!
//! [`AllEmployees`] demonstrates a plain statement, [`EmployeesByEmpno`]
//! a prepared statement re-executed with a new binding for every key.
//! Both hand out [`EmployeeRows`], a lazy cursor that resets its
//! statement when dropped, whether or not it was read to the end.

use rusqlite::{Connection, Row, Rows, Statement, params};

use crate::error::DbError;
use crate::types::Employee;

const SELECT_ALL: &str = "SELECT EMPNO, ENAME, JOB_TITLE, DUPLICATE_EMPNO FROM Employee";

const SELECT_BY_EMPNO: &str =
    "SELECT EMPNO, ENAME, JOB_TITLE, DUPLICATE_EMPNO FROM Employee WHERE EMPNO = ?1";

// ── Cursor ──────────────────────────────────────────────────────────────────

/// Streaming cursor over Employee rows.
///
/// Stops for good after the last row or the first error.
pub struct EmployeeRows<'stmt> {
    rows: Rows<'stmt>,
    done: bool,
}

impl<'stmt> EmployeeRows<'stmt> {
    fn new(rows: Rows<'stmt>) -> Self {
        Self { rows, done: false }
    }
}

impl Iterator for EmployeeRows<'_> {
    type Item = Result<Employee, DbError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = match self.rows.next() {
            Ok(Some(row)) => row_to_employee(row).map_err(DbError::from),
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => Err(e.into()),
        };
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}

fn row_to_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        empno: row.get(0)?,
        ename: row.get(1)?,
        job_title: row.get(2)?,
        duplicate_empno: row.get(3)?,
    })
}

// ── Statements ──────────────────────────────────────────────────────────────

/// Unparameterized "select every employee" statement.
pub struct AllEmployees<'conn> {
    stmt: Statement<'conn>,
}

impl<'conn> AllEmployees<'conn> {
    pub fn prepare(conn: &'conn Connection) -> Result<Self, DbError> {
        Ok(Self {
            stmt: conn.prepare(SELECT_ALL)?,
        })
    }

    /// Run the query. Row order is whatever the store returns.
    pub fn rows(&mut self) -> Result<EmployeeRows<'_>, DbError> {
        Ok(EmployeeRows::new(self.stmt.query([])?))
    }
}

/// Prepared "select by EMPNO" statement, reusable across keys.
pub struct EmployeesByEmpno<'conn> {
    stmt: Statement<'conn>,
}

impl<'conn> EmployeesByEmpno<'conn> {
    pub fn prepare(conn: &'conn Connection) -> Result<Self, DbError> {
        Ok(Self {
            stmt: conn.prepare(SELECT_BY_EMPNO)?,
        })
    }

    /// Bind `empno` and run the query.
    pub fn rows_for(&mut self, empno: i32) -> Result<EmployeeRows<'_>, DbError> {
        Ok(EmployeeRows::new(self.stmt.query(params![empno])?))
    }
}

// ── Collecting helpers ──────────────────────────────────────────────────────

/// Every employee, in store order.
pub fn list_all(conn: &Connection) -> Result<Vec<Employee>, DbError> {
    let mut query = AllEmployees::prepare(conn)?;
    let rows = query.rows()?;
    rows.collect()
}

/// Employees with the given EMPNO (zero or one, EMPNO being the key).
pub fn find_by_empno(conn: &Connection, empno: i32) -> Result<Vec<Employee>, DbError> {
    let mut query = EmployeesByEmpno::prepare(conn)?;
    let rows = query.rows_for(empno)?;
    rows.collect()
}

/// Matches for each key, concatenated in key order.
pub fn list_by_empnos(conn: &Connection, empnos: &[i32]) -> Result<Vec<Employee>, DbError> {
    let mut query = EmployeesByEmpno::prepare(conn)?;
    let mut found = Vec::new();
    for &empno in empnos {
        for employee in query.rows_for(empno)? {
            found.push(employee?);
        }
    }
    Ok(found)
}
