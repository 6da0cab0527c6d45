//! Task entity and the request/filter types used by the task store.

use crate::libs::tags;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default priority assigned when the caller does not supply one.
///
/// Priorities run from 1 (high) to 5 (low) by convention. The store itself
/// does not range-check; callers validate where it matters.
pub const DEFAULT_PRIORITY: i64 = 3;

/// A stored task.
///
/// `tags` holds the canonical normalized set (lowercase, sorted, deduplicated)
/// and serializes as an ordered list of strings, which is the wire shape the
/// front ends expose. The comma-joined stored form never leaves the db layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub done: bool,
    pub priority: i64,
    pub due_date: Option<String>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Input for creating a task.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub priority: Option<i64>,
    pub due_date: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        NewTask {
            title: title.to_string(),
            ..Default::default()
        }
    }
}

/// Filter for listing tasks. All supplied criteria AND together.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    /// Include completed tasks. Defaults to true.
    pub show_done: bool,
    /// Substring match on the title (SQLite LIKE semantics).
    pub search: Option<String>,
    /// Exact tag-name containment against the normalized tag set.
    pub tag: Option<String>,
}

impl Default for TaskFilter {
    fn default() -> Self {
        TaskFilter {
            show_done: true,
            search: None,
            tag: None,
        }
    }
}

impl TaskFilter {
    pub fn open_only() -> Self {
        TaskFilter {
            show_done: false,
            ..Default::default()
        }
    }
}

/// Partial update for a task.
///
/// An outer `None` means "field not supplied, leave it alone"; for clearable
/// fields the inner `Option` carries the explicit value, so
/// `due_date: Some(None)` clears the due date while `due_date: None` keeps
/// whatever is stored. A supplied tags list is re-normalized; an empty one
/// clears the column. A patch with nothing supplied is a no-op and must not
/// bump `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub priority: Option<i64>,
    pub due_date: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.priority.is_none() && self.due_date.is_none() && self.notes.is_none() && self.tags.is_none()
    }
}

/// Due-date classification relative to a given day.
///
/// Dates are stored verbatim, so an unparsable value is a real state: it
/// classifies as `Invalid` rather than overdue, today or future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    None,
    Invalid,
    Overdue,
    Today,
    Future,
}

/// Classifies a stored due date against `today`.
pub fn due_status(due_date: Option<&str>, today: NaiveDate) -> DueStatus {
    let raw = match due_date {
        Some(value) if !value.is_empty() => value,
        _ => return DueStatus::None,
    };

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Err(_) => DueStatus::Invalid,
        Ok(date) if date < today => DueStatus::Overdue,
        Ok(date) if date == today => DueStatus::Today,
        Ok(_) => DueStatus::Future,
    }
}

impl Task {
    pub fn due_status_on(&self, today: NaiveDate) -> DueStatus {
        due_status(self.due_date.as_deref(), today)
    }

    /// True when the task carries the given tag (exact name, case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        tags::contains(&self.tags, tag)
    }
}
