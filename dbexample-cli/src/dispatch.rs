//! Command dispatch: validate the parsed command, open the database, run
//! the matching flow, close the database.

use std::io::Write;
use std::path::Path;

use crate::CliError;
use crate::cli_types::Commands;
use crate::commands::{insert_with_duplicate, list_all, list_by_empno, parse_empno};

/// A validated command, ready to run.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Invocation {
    ListAll,
    /// Tokens stay unparsed: each is checked only when its turn comes.
    ListByEmpno { tokens: Vec<String> },
    InsertWithDuplicate {
        empno: i32,
        ename: String,
        job_title: String,
    },
}

impl Invocation {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::ListAll => list_all::NAME,
            Self::ListByEmpno { .. } => list_by_empno::NAME,
            Self::InsertWithDuplicate { .. } => insert_with_duplicate::NAME,
        }
    }
}

impl TryFrom<Commands> for Invocation {
    type Error = CliError;

    fn try_from(command: Commands) -> Result<Self, Self::Error> {
        Ok(match command {
            Commands::ListAll => Self::ListAll,
            Commands::ListByEmpno { empnos } => Self::ListByEmpno { tokens: empnos },
            Commands::InsertWithDuplicate {
                empno,
                ename,
                job_title,
            } => Self::InsertWithDuplicate {
                empno: parse_empno(&empno)?,
                ename,
                job_title,
            },
        })
    }
}

/// Run `invocation` against the database at `database`, writing rows to `out`.
///
/// The connection is closed on every path. A close failure is reported
/// only when the command itself succeeded.
pub(crate) fn run<W: Write>(
    invocation: &Invocation,
    database: &Path,
    out: &mut W,
) -> Result<(), CliError> {
    let command = invocation.name();
    log::debug!("Running {}", command);

    let conn = dbexample_db::connect(database).map_err(|e| CliError::operation(command, e))?;

    let result = match invocation {
        Invocation::ListAll => list_all::run_list_all(&conn, out),
        Invocation::ListByEmpno { tokens } => {
            list_by_empno::run_list_by_empno(&conn, tokens, out)
        }
        Invocation::InsertWithDuplicate {
            empno,
            ename,
            job_title,
        } => insert_with_duplicate::run_insert_with_duplicate(&conn, *empno, ename, job_title),
    };

    match (result, dbexample_db::close(conn)) {
        (Ok(()), Err(e)) => Err(CliError::operation(command, e)),
        (Err(e), Err(close_err)) => {
            log::warn!("Failed to close database: {}", close_err);
            Err(e)
        }
        (result, Ok(())) => result,
    }
}
