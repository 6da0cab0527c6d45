use super::db::{now_utc_iso, Db};
use crate::libs::document::{Document, NewDocument};
use crate::libs::error::StoreError;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_DOCUMENT: &str = "INSERT INTO documents (task_id, original_name, stored_name, content_type, size, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_DOCUMENTS: &str = "SELECT id, task_id, original_name, stored_name, content_type, size, created_at FROM documents";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_TASK: &str = "WHERE task_id = ?1 ORDER BY created_at DESC, id DESC";
const DELETE_DOCUMENT: &str = "DELETE FROM documents WHERE id = ?1";
const TASK_EXISTS: &str = "SELECT 1 FROM tasks WHERE id = ?1";

/// Metadata store for per-task document attachments.
///
/// Records metadata only; the attachment storage owns the file bytes and the
/// caller sequences the two (bytes flushed before the row is inserted, row
/// removed before the bytes are).
pub struct Documents {
    pub conn: Connection,
}

impl Documents {
    pub fn new() -> anyhow::Result<Documents> {
        let db = Db::new()?;

        Ok(Documents { conn: db.conn })
    }

    /// Records a stored attachment and returns the row.
    ///
    /// The referenced task is checked inside the same transaction as the
    /// insert, so a concurrent task delete cannot slip a document in under a
    /// dead parent.
    pub fn create(&mut self, new_document: NewDocument) -> Result<Document, StoreError> {
        let tx = self.conn.transaction()?;

        let task_exists: Option<i64> = tx.query_row(TASK_EXISTS, params![new_document.task_id], |row| row.get(0)).optional()?;
        if task_exists.is_none() {
            return Err(StoreError::TaskNotFound(new_document.task_id));
        }

        tx.execute(
            INSERT_DOCUMENT,
            params![
                new_document.task_id,
                new_document.original_name,
                new_document.stored_name,
                new_document.content_type,
                new_document.size,
                now_utc_iso()
            ],
        )?;
        let id = tx.last_insert_rowid();
        let document = tx.query_row(&format!("{} {}", SELECT_DOCUMENTS, WHERE_ID), params![id], map_document)?;
        tx.commit()?;

        Ok(document)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Document>, StoreError> {
        self.conn
            .query_row(&format!("{} {}", SELECT_DOCUMENTS, WHERE_ID), params![id], map_document)
            .optional()
            .map_err(Into::into)
    }

    /// Lists a task's documents, newest first.
    pub fn fetch_for_task(&mut self, task_id: i64) -> Result<Vec<Document>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_DOCUMENTS, WHERE_TASK))?;
        let document_iter = stmt.query_map(params![task_id], map_document)?;

        let mut documents = Vec::new();
        for document in document_iter {
            documents.push(document?);
        }
        Ok(documents)
    }

    /// Deletes the metadata row only; file bytes are the caller's to remove.
    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let affected = self.conn.execute(DELETE_DOCUMENT, params![id])?;
        if affected == 0 {
            return Err(StoreError::DocumentNotFound(id));
        }
        Ok(())
    }
}

fn map_document(row: &Row<'_>) -> rusqlite::Result<Document> {
    Ok(Document {
        id: row.get(0)?,
        task_id: row.get(1)?,
        original_name: row.get(2)?,
        stored_name: row.get(3)?,
        content_type: row.get(4)?,
        size: row.get(5)?,
        created_at: row.get(6)?,
    })
}
