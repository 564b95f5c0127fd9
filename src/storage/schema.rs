//! Database connection and table management.

use super::{classify, StorageError};
use rusqlite::Connection;
use std::path::Path;

/// Default table for the seasons listing export.
pub const SEASONS_TABLE: &str = "players_by_seasons";
/// Default table for the distinct-positions export.
pub const POSITIONS_TABLE: &str = "positions";

/// Database connection manager for roster exports.
pub struct RosterDatabase {
    pub(crate) conn: Connection,
}

impl RosterDatabase {
    /// Open (creating if needed) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn =
            Connection::open(path.as_ref()).map_err(|e| StorageError::ConnectionFailed {
                message: e.to_string(),
            })?;
        Ok(Self { conn })
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::ConnectionFailed {
            message: e.to_string(),
        })?;
        Ok(Self { conn })
    }

    /// Create the `(id autoincrement, name, seasons)` table.
    ///
    /// Creation is not idempotent on purpose: an existing table comes
    /// back as `AlreadyExists` so callers can report it as
    /// informational rather than fatal.
    pub fn create_seasons_table(&self, table: &str) -> Result<(), StorageError> {
        let sql = format!(
            "CREATE TABLE {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                seasons INTEGER
            )"
        );
        self.execute_create(table, &sql)
    }

    /// Create the single-column `(position)` table.
    pub fn create_positions_table(&self, table: &str) -> Result<(), StorageError> {
        let sql = format!("CREATE TABLE {table} (position TEXT)");
        self.execute_create(table, &sql)
    }

    fn execute_create(&self, table: &str, sql: &str) -> Result<(), StorageError> {
        match self.conn.execute(sql, []) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(_, Some(message)))
                if message.contains("already exists") =>
            {
                Err(StorageError::AlreadyExists {
                    table: table.to_string(),
                })
            }
            Err(rusqlite::Error::SqlInputError { ref msg, .. })
                if msg.contains("already exists") =>
            {
                Err(StorageError::AlreadyExists {
                    table: table.to_string(),
                })
            }
            Err(e) => Err(classify(e)),
        }
    }
}
