//! Connection gateway to the SQLite store.
//!
//! The SQLite client library is initialized once per process, on first
//! use, and every connection goes through [`connect`] so that the
//! connection pragmas are applied uniformly. Connections are released
//! with [`close`].

use std::path::Path;
use std::sync::OnceLock;

use rusqlite::{Connection, OpenFlags};

use crate::error::DbError;

/// Oldest SQLite release with enforced foreign keys (3.6.19).
const MIN_SQLITE_VERSION: i32 = 3_006_019;

/// The initialized SQLite client library.
#[derive(Debug)]
pub struct Driver {
    version: &'static str,
}

impl Driver {
    /// SQLite library version string, e.g. `3.46.0`.
    pub fn version(&self) -> &'static str {
        self.version
    }
}

static DRIVER: OnceLock<Result<Driver, String>> = OnceLock::new();

/// Locate and validate the SQLite client library.
///
/// Runs the check once per process; later calls return the cached result.
pub fn driver() -> Result<&'static Driver, DbError> {
    DRIVER
        .get_or_init(|| {
            let number = rusqlite::version_number();
            if number < MIN_SQLITE_VERSION {
                return Err(format!(
                    "SQLite {} is too old; at least 3.6.19 is required",
                    rusqlite::version(),
                ));
            }
            log::debug!("Loaded SQLite {}", rusqlite::version());
            Ok(Driver {
                version: rusqlite::version(),
            })
        })
        .as_ref()
        .map_err(|msg| DbError::DriverUnavailable(msg.clone()))
}

/// Open an existing database.
///
/// The file is never created: a missing database is reported as a
/// connectivity failure. Foreign key enforcement is switched on for the
/// connection.
pub fn connect(path: &Path) -> Result<Connection, DbError> {
    driver()?;

    let connectivity = |source| DbError::Connectivity {
        path: path.to_path_buf(),
        source,
    };

    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(connectivity)?;

    // Reading the schema catches files that exist but are not databases.
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(connectivity)?;

    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    log::debug!("Opened database {}", path.display());
    Ok(conn)
}

/// Close a connection, reporting any error from the store.
pub fn close(conn: Connection) -> Result<(), DbError> {
    conn.close().map_err(|(_, e)| DbError::Execution(e))?;
    log::debug!("Closed database connection");
    Ok(())
}
