use std::sync::Arc;

use anyhow::Result;
use rusqlite::{OptionalExtension, params};

use crate::Database;
use crate::models::SecurityPinRow;

/// The single row in security_pins. The CHECK constraint in the schema
/// keeps any other id out, so the table holds at most one PIN.
const PIN_ROW_ID: i64 = 1;

/// Access to the stored app-lock PIN. The PIN arrives here already
/// encrypted; this layer only moves ciphertext in and out of SQLite.
#[derive(Clone)]
pub struct PinStore {
    db: Arc<Database>,
}

impl PinStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Store a PIN, replacing whatever was there. The previous value is
    /// overwritten, not versioned.
    pub fn set(&self, encrypted_pin: &str) -> Result<()> {
        self.db.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO security_pins (id, encrypted_pin) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET
                     encrypted_pin = excluded.encrypted_pin,
                     updated_at = datetime('now')",
                params![PIN_ROW_ID, encrypted_pin],
            )?;
            Ok(())
        })
    }

    /// Fetch the stored PIN row. Absence is a normal state, not an error.
    pub fn get(&self) -> Result<Option<SecurityPinRow>> {
        self.db.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, encrypted_pin, created_at, updated_at
                     FROM security_pins WHERE id = ?1",
                    params![PIN_ROW_ID],
                    |row| {
                        Ok(SecurityPinRow {
                            id: row.get(0)?,
                            encrypted_pin: row.get(1)?,
                            created_at: row.get(2)?,
                            updated_at: row.get(3)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Number of stored PINs, 0 or 1. Cheap existence check.
    pub fn count(&self) -> Result<i64> {
        self.db.with_conn(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM security_pins", [], |row| row.get(0))?;
            Ok(n)
        })
    }

    /// Remove the stored PIN. Fine to call when none exists; that's a no-op.
    pub fn clear(&self) -> Result<()> {
        self.db.with_conn_mut(|conn| {
            conn.execute("DELETE FROM security_pins", [])?;
            Ok(())
        })
    }

    /// Overwrite an existing PIN. Never creates the row; first-time setup
    /// goes through [`set`](Self::set).
    pub fn update(&self, encrypted_pin: &str) -> Result<()> {
        self.db.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE security_pins SET encrypted_pin = ?1, updated_at = datetime('now')
                 WHERE id = ?2",
                params![encrypted_pin, PIN_ROW_ID],
            )?;
            Ok(())
        })
    }
}
