use std::io::Write;

use dbexample_db::EmployeesByEmpno;
use rusqlite::Connection;

use crate::CliError;
use crate::error::FailureCause;

use super::{parse_empno, print_rows};

pub(crate) const NAME: &str = "list-by-empno";

fn failed(cause: impl Into<FailureCause>) -> CliError {
    CliError::operation(NAME, cause)
}

/// Print the employees matching each token, re-running one prepared
/// statement per key.
///
/// Tokens are validated as they are reached, so rows for keys before an
/// invalid token have already been printed when the usage error is raised.
pub(crate) fn run_list_by_empno<W: Write>(
    conn: &Connection,
    tokens: &[String],
    out: &mut W,
) -> Result<(), CliError> {
    let mut query = EmployeesByEmpno::prepare(conn).map_err(failed)?;

    for token in tokens {
        let empno = parse_empno(token)?;
        let rows = query.rows_for(empno).map_err(failed)?;
        let printed = print_rows(rows, out).map_err(failed)?;
        log::debug!("EMPNO {}: {} row(s)", empno, printed);
    }

    Ok(())
}
