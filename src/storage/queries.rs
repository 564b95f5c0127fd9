//! Row insertion and read-back.

use super::{classify, schema::RosterDatabase, StorageError};
use rusqlite::params;

impl RosterDatabase {
    /// Insert `(name, seasons)` rows inside a single transaction; any
    /// failure rolls the whole batch back.
    pub fn insert_seasons_rows(
        &mut self,
        table: &str,
        rows: &[(String, u32)],
    ) -> Result<(), StorageError> {
        let tx = self.conn.transaction().map_err(classify)?;
        {
            let sql = format!("INSERT INTO {table} (name, seasons) VALUES (?1, ?2)");
            let mut stmt = tx.prepare(&sql).map_err(classify)?;
            for (name, seasons) in rows {
                stmt.execute(params![name, seasons]).map_err(classify)?;
            }
        }
        tx.commit().map_err(classify)
    }

    /// Insert position rows inside a single transaction.
    pub fn insert_positions(
        &mut self,
        table: &str,
        positions: &[String],
    ) -> Result<(), StorageError> {
        let tx = self.conn.transaction().map_err(classify)?;
        {
            let sql = format!("INSERT INTO {table} (position) VALUES (?1)");
            let mut stmt = tx.prepare(&sql).map_err(classify)?;
            for position in positions {
                stmt.execute(params![position]).map_err(classify)?;
            }
        }
        tx.commit().map_err(classify)
    }

    /// All `(name, seasons)` rows in insertion order.
    pub fn seasons_rows(&self, table: &str) -> Result<Vec<(String, u32)>, StorageError> {
        let sql = format!("SELECT name, seasons FROM {table} ORDER BY id");
        let mut stmt = self.conn.prepare(&sql).map_err(classify)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(classify)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(classify)?);
        }
        Ok(out)
    }

    /// All stored position strings.
    pub fn position_rows(&self, table: &str) -> Result<Vec<String>, StorageError> {
        let sql = format!("SELECT position FROM {table}");
        let mut stmt = self.conn.prepare(&sql).map_err(classify)?;
        let rows = stmt.query_map([], |row| row.get(0)).map_err(classify)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(classify)?);
        }
        Ok(out)
    }
}
