//! Display implementation for taskdock application messages.
//!
//! All user-facing text lives in this one place. Each `Message` variant maps
//! to its terminal representation here, so wording stays consistent and the
//! rest of the code never formats strings for the user directly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created successfully", id),
            Message::TaskUpdated(id) => format!("Task #{} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted successfully", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskMarkedDone(id) => format!("Task #{} marked as done.", id),
            Message::TaskMarkedOpen(id) => format!("Task #{} reopened.", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::OpenTasksHeader => "Open tasks:".to_string(),
            Message::OverdueTasksHeader => "Overdue tasks:".to_string(),
            Message::DueTodayTasksHeader => "Tasks due today:".to_string(),
            Message::SearchResultsHeader(term) => format!("Search results for '{}':", term),
            Message::TasksWithTagHeader(tag) => format!("Tasks tagged '{}':", tag),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TaskListSummary {
                total,
                open,
                done,
                overdue,
                due_today,
            } => format!(
                "Total: {}, open: {}, done: {}, overdue: {}, due today: {}",
                total, open, done, overdue, due_today
            ),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}' and all of its documents?", title),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::InvalidPriorityIgnored => "Invalid priority, keeping the current value.".to_string(),
            Message::InvalidDueDateIgnored => "Invalid date (expected YYYY-MM-DD), keeping the current value.".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskPriority => "Priority (1=high, 5=low)".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, optional)".to_string(),
            Message::PromptTaskNotes => "Notes (optional)".to_string(),
            Message::PromptTaskTags => "Tags (comma-separated, optional)".to_string(),
            Message::PromptSearchTerm => "Search term".to_string(),
            Message::PromptTagFilter => "Tag to filter by".to_string(),
            Message::SelectTaskAction => "What would you like to do?".to_string(),
            Message::SelectTaskToEdit => "Select a task to edit".to_string(),
            Message::SelectTaskToDelete => "Select a task to delete".to_string(),
            Message::SelectTaskToComplete => "Select a task to mark as done".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),

            // === DOCUMENT MESSAGES ===
            Message::DocumentAttached(id, name) => format!("Document #{} ('{}') attached.", id, name),
            Message::DocumentDeleted(id) => format!("Document #{} deleted.", id),
            Message::DocumentNotFoundWithId(id) => format!("Document with ID {} not found.", id),
            Message::DocumentDownloaded(path) => format!("Document saved to {}", path),
            Message::DocumentsHeader(task_id) => format!("Documents for task #{}:", task_id),
            Message::NoDocumentsFound(task_id) => format!("No documents attached to task #{}.", task_id),
            Message::ConfirmDeleteDocument(name) => format!("Delete document '{}'?", name),
            Message::AttachmentFileMissing(name) => format!("File '{}' is missing on disk.", name),
            Message::AttachmentTooLarge(limit) => format!("File exceeds the configured limit of {} MB.", limit),
            Message::AttachmentExtensionRejected(ext) => format!("File extension '{}' is not allowed.", ext),
            Message::AttachmentNotAFile(path) => format!("'{}' is not a regular file.", path),

            // === TAG MESSAGES ===
            Message::TagSummaryHeader => "Tags in use:".to_string(),
            Message::NoTagsFound => "No tags found.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleAttachments => "Attachment settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptMaxAttachmentSize => "Maximum attachment size in MB".to_string(),
            Message::PromptAllowedExtensions => "Allowed extensions (comma-separated, empty for any)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),
            Message::NothingToRollback => "Nothing to roll back.".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
