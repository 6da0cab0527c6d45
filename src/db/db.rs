use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskdock.db";

/// Handle to the embedded SQLite database.
///
/// Opening a handle resolves the database path under the platform data
/// directory, turns foreign-key enforcement on (the documents table relies on
/// `ON DELETE CASCADE`) and applies any pending schema migrations. Each store
/// opens its own handle; SQLite's own locking serializes concurrent callers.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let mut conn = Self::open()?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a connection without applying migrations. Used by migration
    /// tests that drive the manager by hand.
    pub fn new_without_migrations() -> Result<Connection> {
        Self::open()
    }

    fn open() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn = Connection::open(db_file_path)?;
        // Cascade delete of document metadata depends on this pragma
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        Ok(conn)
    }
}

/// Current UTC time as an ISO-8601 string, the format every timestamp column
/// stores. Microsecond precision keeps `updated_at >= created_at` meaningful
/// for mutations within the same second.
pub fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
