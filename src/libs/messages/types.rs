#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TaskMarkedDone(i64),
    TaskMarkedOpen(i64),
    TasksHeader,
    OpenTasksHeader,
    OverdueTasksHeader,
    DueTodayTasksHeader,
    SearchResultsHeader(String),
    TasksWithTagHeader(String),
    NoTasksFound,
    TaskListSummary {
        total: usize,
        open: usize,
        done: usize,
        overdue: usize,
        due_today: usize,
    },
    ConfirmDeleteTask(String),
    NoChangesDetected,
    InvalidPriorityIgnored,
    InvalidDueDateIgnored,
    PromptTaskTitle,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptTaskNotes,
    PromptTaskTags,
    PromptSearchTerm,
    PromptTagFilter,
    SelectTaskAction,
    SelectTaskToEdit,
    SelectTaskToDelete,
    SelectTaskToComplete,
    EditingTask(String),

    // === DOCUMENT MESSAGES ===
    DocumentAttached(i64, String),
    DocumentDeleted(i64),
    DocumentNotFoundWithId(i64),
    DocumentDownloaded(String),
    DocumentsHeader(i64),
    NoDocumentsFound(i64),
    ConfirmDeleteDocument(String),
    AttachmentFileMissing(String),
    AttachmentTooLarge(u64),
    AttachmentExtensionRejected(String),
    AttachmentNotAFile(String),

    // === TAG MESSAGES ===
    TagSummaryHeader,
    NoTagsFound,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleAttachments,
    PromptSelectModules,
    PromptMaxAttachmentSize,
    PromptAllowedExtensions,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
