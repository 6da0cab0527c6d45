use super::db::Db;
use crate::libs::error::StoreError;
use crate::libs::tags;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SELECT_TAGS_AND_DONE: &str = "SELECT tags, done FROM tasks WHERE tags IS NOT NULL";

/// Per-tag usage counts derived from the tasks table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSummary {
    pub name: String,
    pub total: i64,
    pub open: i64,
}

/// Aggregation view over the tag sets stored on tasks.
///
/// Tags live denormalized on the task rows, so the summary is computed by
/// scanning and exploding every stored set rather than joining a tag table.
pub struct Tags {
    pub conn: Connection,
}

impl Tags {
    pub fn new() -> anyhow::Result<Tags> {
        let db = Db::new()?;

        Ok(Tags { conn: db.conn })
    }

    /// Counts total and open tasks per tag, alphabetically by tag name.
    pub fn summarize(&mut self) -> Result<Vec<TagSummary>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_TAGS_AND_DONE)?;
        let row_iter = stmt.query_map([], |row| {
            let stored: Option<String> = row.get(0)?;
            let done: i64 = row.get(1)?;
            Ok((stored, done != 0))
        })?;

        // BTreeMap keeps the output deterministically sorted by name
        let mut counts: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for row in row_iter {
            let (stored, done) = row?;
            for tag in tags::from_stored(stored.as_deref()) {
                let entry = counts.entry(tag).or_insert((0, 0));
                entry.0 += 1;
                if !done {
                    entry.1 += 1;
                }
            }
        }

        Ok(counts
            .into_iter()
            .map(|(name, (total, open))| TagSummary { name, total, open })
            .collect())
    }
}
