//! CLI type definitions: command enum and global options.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

const AFTER_HELP: &str = "\
insert-with-duplicate adds the given employee together with a duplicate
record whose EMPNO is one greater, linked to the first one through the
DUPLICATE_EMPNO foreign key. Both rows are written in one transaction.

The database is taken from --database, then $DBEXAMPLE_DATABASE, then
the [database] path in the config file, then ./lesson22.db.";

#[derive(Parser, Debug)]
#[command(name = "dbexample", version)]
#[command(about = "Query and update the Employee table", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub(crate) struct Cli {
    /// SQLite database file (must already exist)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Show every employee
    ListAll,

    /// Show the employees with the given EMPNO values
    ListByEmpno {
        /// Employee numbers to look up, in output order. Every token after
        /// the command name is taken as a key, even one starting with '-'
        #[arg(value_name = "EMPNO", allow_hyphen_values = true)]
        empnos: Vec<String>,
    },

    /// Add an employee plus a linked duplicate in one transaction
    InsertWithDuplicate {
        /// Employee number; the duplicate gets EMPNO + 1
        #[arg(value_name = "EMPNO", allow_negative_numbers = true)]
        empno: String,

        /// Employee name
        #[arg(value_name = "ENAME", allow_hyphen_values = true)]
        ename: String,

        /// Job title
        #[arg(value_name = "JOB_TITLE", allow_hyphen_values = true)]
        job_title: String,
    },
}

/// Full usage text, printed after usage errors.
pub(crate) fn usage_text() -> String {
    Cli::command().render_help().to_string()
}
