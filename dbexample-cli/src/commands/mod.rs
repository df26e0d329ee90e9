pub(crate) mod insert_with_duplicate;
pub(crate) mod list_all;
pub(crate) mod list_by_empno;

use std::io::Write;

use dbexample_db::EmployeeRows;

use crate::CliError;
use crate::error::FailureCause;

/// Parse an EMPNO argument.
pub(crate) fn parse_empno(token: &str) -> Result<i32, CliError> {
    token
        .parse()
        .map_err(|_| CliError::usage(format!("EMPNO must be a number: \"{}\"", token)))
}

/// Write each row as one line, then flush. Returns the number of rows.
pub(crate) fn print_rows<W: Write>(
    rows: EmployeeRows<'_>,
    out: &mut W,
) -> Result<usize, FailureCause> {
    let mut count = 0;
    for row in rows {
        writeln!(out, "{}", row?)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}
