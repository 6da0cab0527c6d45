use super::db::{now_utc_iso, Db};
use crate::libs::error::StoreError;
use crate::libs::tags;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskPatch, DEFAULT_PRIORITY};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};

const INSERT_TASK: &str = "INSERT INTO tasks (title, done, priority, due_date, notes, tags, created_at, updated_at)
    VALUES (?1, 0, ?2, ?3, ?4, ?5, ?6, ?6)";
const SELECT_TASKS: &str = "SELECT id, title, done, priority, due_date, notes, tags, created_at, updated_at FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
// Most urgent first: priority, dated before undated, earliest due date,
// insertion order as the final tiebreak.
const ORDER_BY_URGENCY: &str = "ORDER BY priority, due_date IS NULL, due_date, created_at";
const SET_DONE: &str = "UPDATE tasks SET done = ?2, updated_at = ?3 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> anyhow::Result<Tasks> {
        let db = Db::new()?;

        Ok(Tasks { conn: db.conn })
    }

    /// Creates a task and returns the stored row.
    ///
    /// The title must be non-empty after trimming. Insert and refetch share
    /// one transaction so the returned entity is exactly what was committed.
    pub fn create(&mut self, new_task: NewTask) -> Result<Task, StoreError> {
        let title = new_task.title.trim().to_string();
        if title.is_empty() {
            return Err(StoreError::validation("task title must not be empty"));
        }

        let priority = new_task.priority.unwrap_or(DEFAULT_PRIORITY);
        let tag_set = tags::normalize(new_task.tags.unwrap_or_default());
        let now = now_utc_iso();

        let tx = self.conn.transaction()?;
        tx.execute(
            INSERT_TASK,
            params![title, priority, new_task.due_date, new_task.notes, tags::to_stored(&tag_set), now],
        )?;
        let id = tx.last_insert_rowid();
        let task = tx.query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], map_task)?;
        tx.commit()?;

        Ok(task)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Task>, StoreError> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], map_task)
            .optional()
            .map_err(Into::into)
    }

    /// Lists tasks matching the filter, most urgent first.
    pub fn fetch(&mut self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut bindings: Vec<String> = Vec::new();

        if !filter.show_done {
            conditions.push("done = 0");
        }
        if let Some(search) = &filter.search {
            conditions.push("title LIKE ?");
            bindings.push(format!("%{}%", search));
        }
        if let Some(tag) = &filter.tag {
            // Tags are stored as "a,b,c"; wrapping both sides in commas makes
            // the containment test exact per tag name, so "art" cannot match
            // inside "cart".
            conditions.push("(',' || IFNULL(tags, '') || ',') LIKE ?");
            bindings.push(format!("%,{},%", tag.trim().to_lowercase()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", conditions.join(" AND "))
        };
        let query = format!("{} {}{}", SELECT_TASKS, where_clause, ORDER_BY_URGENCY);

        let mut stmt = self.conn.prepare(&query)?;
        let task_iter = stmt.query_map(params_from_iter(bindings.iter()), map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Applies a partial update and returns the stored row.
    ///
    /// Only supplied fields change; a wholly-unspecified patch is a no-op
    /// that leaves `updated_at` untouched. A supplied tags list is
    /// re-normalized, an empty one clears the column.
    pub fn update(&mut self, id: i64, patch: &TaskPatch) -> Result<Task, StoreError> {
        if patch.is_empty() {
            return self.get(id)?.ok_or(StoreError::TaskNotFound(id));
        }

        let mut assignments: Vec<&str> = Vec::new();
        let mut bindings: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(title) = &patch.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(StoreError::validation("task title must not be empty"));
            }
            assignments.push("title = ?");
            bindings.push(Box::new(title));
        }
        if let Some(priority) = patch.priority {
            assignments.push("priority = ?");
            bindings.push(Box::new(priority));
        }
        if let Some(due_date) = &patch.due_date {
            assignments.push("due_date = ?");
            bindings.push(Box::new(due_date.clone()));
        }
        if let Some(notes) = &patch.notes {
            assignments.push("notes = ?");
            bindings.push(Box::new(notes.clone()));
        }
        if let Some(tag_input) = &patch.tags {
            let tag_set = tags::normalize(tag_input);
            assignments.push("tags = ?");
            bindings.push(Box::new(tags::to_stored(&tag_set)));
        }

        assignments.push("updated_at = ?");
        bindings.push(Box::new(now_utc_iso()));
        bindings.push(Box::new(id));

        // Mutate and refetch in one transaction so the returned entity is
        // the committed state
        let tx = self.conn.transaction()?;
        let query = format!("UPDATE tasks SET {} WHERE id = ?", assignments.join(", "));
        let affected = tx.execute(&query, params_from_iter(bindings.iter()))?;
        if affected == 0 {
            return Err(StoreError::TaskNotFound(id));
        }
        let task = tx.query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], map_task)?;
        tx.commit()?;

        Ok(task)
    }

    /// Sets the done flag. Always bumps `updated_at`.
    pub fn set_done(&mut self, id: i64, done: bool) -> Result<Task, StoreError> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute(SET_DONE, params![id, done as i64, now_utc_iso()])?;
        if affected == 0 {
            return Err(StoreError::TaskNotFound(id));
        }
        let task = tx.query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], map_task)?;
        tx.commit()?;

        Ok(task)
    }

    /// Deletes a task. Document metadata rows follow via the cascading
    /// foreign key; the caller removes any attachment files afterwards.
    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(StoreError::TaskNotFound(id));
        }
        Ok(())
    }
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let stored_tags: Option<String> = row.get(6)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        done: row.get::<_, i64>(2)? != 0,
        priority: row.get(3)?,
        due_date: row.get(4)?,
        notes: row.get(5)?,
        tags: tags::from_stored(stored_tags.as_deref()),
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
