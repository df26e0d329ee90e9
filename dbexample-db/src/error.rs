use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while talking to the Employee store.
#[derive(Debug, Error)]
pub enum DbError {
    /// The SQLite client library could not be initialized.
    #[error("SQLite client library unavailable: {0}")]
    DriverUnavailable(String),

    /// The database could not be opened or probed.
    #[error("Could not open database {}: {source}", .path.display())]
    Connectivity {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed at the store.
    #[error("SQLite error: {0}")]
    Execution(#[from] rusqlite::Error),

    /// A rollback issued after another failure also failed.
    ///
    /// Only ever logged; the failure that triggered the rollback is the
    /// one returned to callers.
    #[error("Rollback failed: {0}")]
    Rollback(#[source] rusqlite::Error),

    /// `empno + 1` does not fit the EMPNO column.
    #[error("EMPNO {0} has no successor within the integer column range")]
    EmpnoOutOfRange(i32),
}

impl DbError {
    /// True when the store could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::DriverUnavailable(_) | Self::Connectivity { .. })
    }
}
