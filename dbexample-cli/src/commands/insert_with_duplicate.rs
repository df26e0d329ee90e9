use rusqlite::Connection;

use crate::CliError;

pub(crate) const NAME: &str = "insert-with-duplicate";

/// Insert an employee and its duplicate in one transaction. Prints nothing
/// on success.
pub(crate) fn run_insert_with_duplicate(
    conn: &Connection,
    empno: i32,
    ename: &str,
    job_title: &str,
) -> Result<(), CliError> {
    let pair = dbexample_db::insert_with_duplicate(conn, empno, ename, job_title)
        .map_err(|e| CliError::operation(NAME, e))?;
    log::debug!("Inserted {} and {}", pair.original, pair.duplicate);
    Ok(())
}
