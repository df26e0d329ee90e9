use std::io::Write;

use dbexample_db::AllEmployees;
use rusqlite::Connection;

use crate::CliError;
use crate::error::FailureCause;

use super::print_rows;

pub(crate) const NAME: &str = "list-all";

fn failed(cause: impl Into<FailureCause>) -> CliError {
    CliError::operation(NAME, cause)
}

/// Print every employee using a plain, unparameterized statement.
pub(crate) fn run_list_all<W: Write>(conn: &Connection, out: &mut W) -> Result<(), CliError> {
    let mut query = AllEmployees::prepare(conn).map_err(failed)?;
    let rows = query.rows().map_err(failed)?;
    let printed = print_rows(rows, out).map_err(failed)?;
    log::debug!("{} row(s)", printed);
    Ok(())
}
