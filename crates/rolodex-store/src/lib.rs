#![forbid(unsafe_code)]
//! SQLite persistence for contact records.
//!
//! [`ContactStore`] is the sole reader and writer of persisted state; the
//! controllers hold only transient request/response copies. Every operation
//! is a single SQL statement, so each one commits or fails as a unit under
//! SQLite's default journaling.

use rolodex_model::{Contact, ContactDraft};
use rusqlite::{params, Connection};
use std::fmt::{Display, Formatter};
use std::path::Path;

pub const CRATE_NAME: &str = "rolodex-store";

#[derive(Debug)]
#[non_exhaustive]
pub enum StoreError {
    NotFound,
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("contact not found"),
            Self::Sqlite(e) => write!(f, "sqlite error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound => None,
            Self::Sqlite(e) => Some(e),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::QueryReturnedNoRows => Self::NotFound,
            other => Self::Sqlite(other),
        }
    }
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    phone TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    type  TEXT NOT NULL DEFAULT ''
);";

pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory store for tests; same schema, nothing touches disk.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert a new record and return it with its assigned id. Callers
    /// validate the draft first; the store persists whatever it is given.
    pub fn create(&self, draft: &ContactDraft) -> Result<Contact, StoreError> {
        self.conn.execute(
            "INSERT INTO contacts (name, phone, email, type) VALUES (?1, ?2, ?3, ?4)",
            params![draft.name, draft.phone, draft.email, draft.kind],
        )?;
        Ok(Contact::from_draft(self.conn.last_insert_rowid(), draft))
    }

    pub fn get(&self, id: i64) -> Result<Contact, StoreError> {
        let contact = self.conn.query_row(
            "SELECT id, name, phone, email, type FROM contacts WHERE id = ?1",
            params![id],
            row_to_contact,
        )?;
        Ok(contact)
    }

    /// All records in insertion order.
    pub fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phone, email, type FROM contacts ORDER BY id")?;
        let rows = stmt.query_map([], row_to_contact)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Replace every mutable field of the record identified by `id`.
    pub fn update(&self, id: i64, draft: &ContactDraft) -> Result<Contact, StoreError> {
        let affected = self.conn.execute(
            "UPDATE contacts SET name = ?1, phone = ?2, email = ?3, type = ?4 WHERE id = ?5",
            params![draft.name, draft.phone, draft.email, draft.kind, id],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(Contact::from_draft(id, draft))
    }

    /// Remove the record. `NotFound` lets the API surface report 404; the
    /// HTML surface ignores it to keep its delete link idempotent.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub fn count(&self) -> Result<u64, StoreError> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))?;
        Ok(n as u64)
    }
}

fn row_to_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        kind: row.get(4)?,
    })
}
