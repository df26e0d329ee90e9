//! SQLite access layer for the Employee table.
//!
//! Provides the connection gateway, streaming read queries, the
//! transactional insert-with-duplicate writer, and the one-line row
//! formatter used by the CLI.

pub mod error;
pub mod format;
pub mod gateway;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod types;

pub use error::DbError;
pub use format::format_employee;
pub use gateway::{Driver, close, connect, driver};
pub use operations::{DuplicatePair, in_transaction, insert_employee, insert_with_duplicate};
pub use queries::{
    AllEmployees, EmployeeRows, EmployeesByEmpno, find_by_empno, list_all, list_by_empnos,
};
pub use schema::{create_database, create_schema, open_memory};
pub use types::Employee;
