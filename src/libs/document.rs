//! Document entity for per-task binary attachments.
//!
//! The store records metadata only. `stored_name` is the opaque on-disk name
//! generated by the attachment storage; the original client filename is kept
//! separately for downloads and never used as a path.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<i64>,
    pub task_id: i64,
    pub original_name: String,
    pub stored_name: String,
    pub content_type: Option<String>,
    pub size: Option<i64>,
    pub created_at: Option<String>,
}

/// Input for recording a stored attachment.
///
/// The file bytes must already be fully written and flushed before this is
/// handed to the document store.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub task_id: i64,
    pub original_name: String,
    pub stored_name: String,
    pub content_type: Option<String>,
    pub size: i64,
}
