//! Task management command.
//!
//! Exposes the task store on the command line: create, list with filters,
//! edit, done-flag changes, and deletion. Running the command without a
//! subcommand opens an interactive menu covering the same operations.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{due_status, DueStatus, NewTask, Task, TaskFilter, TaskPatch},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Add {
        /// Task title
        title: Option<String>,
        /// Priority, 1 (high) to 5 (low)
        #[arg(short, long)]
        priority: Option<i64>,
        /// Due date in YYYY-MM-DD form
        #[arg(short, long)]
        due: Option<String>,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// List tasks, most urgent first
    List {
        /// Hide completed tasks
        #[arg(short, long)]
        open: bool,
        /// Substring match on the title
        #[arg(short, long)]
        search: Option<String>,
        /// Only tasks carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Mark a task as done (or reopen it)
    Done {
        /// Task ID
        id: i64,
        /// Reopen instead of completing
        #[arg(long)]
        undo: bool,
    },
    /// Edit a task interactively
    Edit {
        /// Task ID
        id: i64,
    },
    /// Delete a task and its documents
    Delete {
        /// Task ID
        id: i64,
    },
    /// Show open tasks whose due date has passed
    Overdue,
    /// Show open tasks due today
    Today,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Add {
            title,
            priority,
            due,
            notes,
            tags,
        }) => handle_add(title, priority, due, notes, tags),
        Some(TaskCommand::List { open, search, tag }) => handle_list(open, search, tag),
        Some(TaskCommand::Done { id, undo }) => handle_done(id, !undo),
        Some(TaskCommand::Edit { id }) => handle_edit(id),
        Some(TaskCommand::Delete { id }) => handle_delete(id),
        Some(TaskCommand::Overdue) => handle_overdue(),
        Some(TaskCommand::Today) => handle_today(),
        None => handle_interactive(),
    }
}

fn handle_add(title: Option<String>, priority: Option<i64>, due: Option<String>, notes: Option<String>, tags: Option<String>) -> Result<()> {
    let new_task = match title {
        Some(title) => NewTask {
            title,
            priority,
            due_date: due.filter(|d| !d.trim().is_empty()),
            notes,
            tags: tags.map(|raw| vec![raw]),
        },
        None => prompt_new_task()?,
    };

    let mut tasks_db = Tasks::new()?;
    let task = tasks_db.create(new_task)?;

    msg_success!(Message::TaskCreated(task.id.unwrap_or(0)));
    Ok(())
}

/// Collects a full task from the user, warning about (and dropping) invalid
/// priority or due-date answers the way the menu front end always has.
fn prompt_new_task() -> Result<NewTask> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;

    let priority_raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .default("3".to_string())
        .interact_text()?;
    let priority = match priority_raw.parse::<i64>() {
        Ok(value) if (1..=5).contains(&value) => Some(value),
        _ => {
            msg_warning!(Message::InvalidPriorityIgnored);
            None
        }
    };

    let due_raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .allow_empty(true)
        .interact_text()?;
    let due_date = if due_raw.trim().is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(due_raw.trim(), "%Y-%m-%d") {
            Ok(_) => Some(due_raw.trim().to_string()),
            Err(_) => {
                msg_warning!(Message::InvalidDueDateIgnored);
                None
            }
        }
    };

    let tags_raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTags.to_string())
        .allow_empty(true)
        .interact_text()?;

    let notes_raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskNotes.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(NewTask {
        title,
        priority,
        due_date,
        notes: if notes_raw.trim().is_empty() { None } else { Some(notes_raw) },
        tags: if tags_raw.trim().is_empty() { None } else { Some(vec![tags_raw]) },
    })
}

fn handle_list(open: bool, search: Option<String>, tag: Option<String>) -> Result<()> {
    let filter = TaskFilter {
        show_done: !open,
        search: search.clone(),
        tag: tag.clone(),
    };

    let mut tasks_db = Tasks::new()?;
    let tasks = tasks_db.fetch(&filter)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let header = match (&search, &tag, open) {
        (Some(term), _, _) => Message::SearchResultsHeader(term.clone()),
        (_, Some(tag), _) => Message::TasksWithTagHeader(tag.to_lowercase()),
        (_, _, true) => Message::OpenTasksHeader,
        _ => Message::TasksHeader,
    };
    msg_print!(header, true);
    View::tasks(&tasks, today())?;
    Ok(())
}

fn handle_done(id: i64, done: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    tasks_db.set_done(id, done)?;

    if done {
        msg_success!(Message::TaskMarkedDone(id));
    } else {
        msg_success!(Message::TaskMarkedOpen(id));
    }
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let task = match tasks_db.get(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTask(task.title.clone()), true);
    let patch = prompt_patch(&task)?;

    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    tasks_db.update(id, &patch)?;
    msg_success!(Message::TaskUpdated(id));
    Ok(())
}

/// Collects changed fields from the user. Unchanged answers stay out of the
/// patch; a "-" answer clears a clearable field.
fn prompt_patch(task: &Task) -> Result<TaskPatch> {
    let mut patch = TaskPatch::default();

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;
    if title.trim() != task.title {
        patch.title = Some(title);
    }

    let priority: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .default(task.priority.to_string())
        .interact_text()?;
    if priority != task.priority.to_string() {
        match priority.parse::<i64>() {
            Ok(value) if (1..=5).contains(&value) => patch.priority = Some(value),
            _ => msg_warning!(Message::InvalidPriorityIgnored),
        }
    }

    let due: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(task.due_date.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    if due == "-" {
        patch.due_date = Some(None);
    } else if due != task.due_date.clone().unwrap_or_default() {
        match NaiveDate::parse_from_str(&due, "%Y-%m-%d") {
            Ok(_) => patch.due_date = Some(Some(due)),
            Err(_) => msg_warning!(Message::InvalidDueDateIgnored),
        }
    }

    let notes: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskNotes.to_string())
        .default(task.notes.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    if notes == "-" {
        patch.notes = Some(None);
    } else if notes != task.notes.clone().unwrap_or_default() {
        patch.notes = Some(Some(notes));
    }

    let tags: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTags.to_string())
        .default(task.tags.join(","))
        .allow_empty(true)
        .interact_text()?;
    if tags == "-" {
        patch.tags = Some(Vec::new());
    } else if tags != task.tags.join(",") {
        patch.tags = Some(vec![tags]);
    }

    Ok(patch)
}

fn handle_delete(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let task = match tasks_db.get(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        tasks_db.delete(id)?;
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_overdue() -> Result<()> {
    let tasks = fetch_open_with_status(DueStatus::Overdue)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    msg_print!(Message::OverdueTasksHeader, true);
    View::tasks(&tasks, today())?;
    Ok(())
}

fn handle_today() -> Result<()> {
    let tasks = fetch_open_with_status(DueStatus::Today)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    msg_print!(Message::DueTodayTasksHeader, true);
    View::tasks(&tasks, today())?;
    Ok(())
}

/// Open tasks whose due date classifies as `status` today. Invalid dates
/// never qualify; they are neither overdue nor due.
fn fetch_open_with_status(status: DueStatus) -> Result<Vec<Task>> {
    let mut tasks_db = Tasks::new()?;
    let tasks = tasks_db.fetch(&TaskFilter::open_only())?;
    let today = today();

    Ok(tasks.into_iter().filter(|t| due_status(t.due_date.as_deref(), today) == status).collect())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn handle_interactive() -> Result<()> {
    let options = vec![
        "Show all tasks",
        "Show open tasks",
        "Add task",
        "Mark task as done",
        "Edit task",
        "Delete task",
        "Search tasks",
        "Show overdue tasks",
        "Show tasks due today",
        "Filter by tag",
    ];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => handle_list(false, None, None),
        1 => handle_list(true, None, None),
        2 => handle_add(None, None, None, None, None),
        3 => {
            if let Some(id) = select_task(Message::SelectTaskToComplete)? {
                handle_done(id, true)
            } else {
                Ok(())
            }
        }
        4 => {
            if let Some(id) = select_task(Message::SelectTaskToEdit)? {
                handle_edit(id)
            } else {
                Ok(())
            }
        }
        5 => {
            if let Some(id) = select_task(Message::SelectTaskToDelete)? {
                handle_delete(id)
            } else {
                Ok(())
            }
        }
        6 => {
            let term: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSearchTerm.to_string())
                .interact_text()?;
            handle_list(false, Some(term), None)
        }
        7 => handle_overdue(),
        8 => handle_today(),
        9 => {
            let tag: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTagFilter.to_string())
                .interact_text()?;
            handle_list(false, None, Some(tag))
        }
        _ => Ok(()),
    }
}

/// Presents the current task queue and returns the chosen task's ID.
fn select_task(prompt: Message) -> Result<Option<i64>> {
    let mut tasks_db = Tasks::new()?;
    let tasks = tasks_db.fetch(&TaskFilter::default())?;
    drop(tasks_db);

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(None);
    }

    let labels: Vec<String> = tasks
        .iter()
        .map(|t| format!("#{} [{}] {}", t.id.unwrap_or(0), if t.done { "x" } else { " " }, t.title))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(tasks[selection].id)
}
