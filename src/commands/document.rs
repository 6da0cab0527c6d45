//! Document attachment command.
//!
//! Wires the three collaborators in the order the consistency model requires:
//! policy check, then file bytes written and flushed, then the metadata row.
//! Deletion runs the other way around (metadata first, bytes second), so a
//! crash in between can only ever leave an orphaned file, never a dangling
//! metadata row.

use crate::{
    db::{documents::Documents, tasks::Tasks},
    libs::{
        attachments::AttachmentStorage,
        config::Config,
        document::NewDocument,
        error::StoreError,
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct DocumentArgs {
    #[command(subcommand)]
    command: DocumentCommand,
}

#[derive(Debug, Subcommand)]
enum DocumentCommand {
    /// Attach a file to a task
    Attach {
        /// Task ID
        task_id: i64,
        /// Path of the file to attach
        file: PathBuf,
    },
    /// List a task's documents, newest first
    List {
        /// Task ID
        task_id: i64,
    },
    /// Copy a stored document to a local path
    Download {
        /// Document ID
        id: i64,
        /// Destination path (defaults to the original file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a document
    Delete {
        /// Document ID
        id: i64,
    },
}

pub fn cmd(args: DocumentArgs) -> Result<()> {
    match args.command {
        DocumentCommand::Attach { task_id, file } => handle_attach(task_id, &file),
        DocumentCommand::List { task_id } => handle_list(task_id),
        DocumentCommand::Download { id, output } => handle_download(id, output),
        DocumentCommand::Delete { id } => handle_delete(id),
    }
}

fn handle_attach(task_id: i64, file: &Path) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    if tasks_db.get(task_id)?.is_none() {
        msg_error!(Message::TaskNotFoundWithId(task_id));
        return Ok(());
    }
    drop(tasks_db);

    let original_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| StoreError::validation("attachment path has no file name"))?;

    let config = Config::read()?;
    let storage = AttachmentStorage::new(config.attachments_or_default())?;
    storage.check_policy(file)?;

    // Bytes land on disk, flushed, before the metadata row exists
    let stored_name = AttachmentStorage::stored_name_for(&original_name);
    let size = storage.store(file, &stored_name)?;

    let mut documents_db = Documents::new()?;
    let document = documents_db.create(NewDocument {
        task_id,
        original_name: original_name.clone(),
        stored_name,
        content_type: content_type_of(file),
        size: size as i64,
    })?;

    msg_success!(Message::DocumentAttached(document.id.unwrap_or(0), original_name));
    Ok(())
}

fn handle_list(task_id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    if tasks_db.get(task_id)?.is_none() {
        msg_error!(Message::TaskNotFoundWithId(task_id));
        return Ok(());
    }
    drop(tasks_db);

    let mut documents_db = Documents::new()?;
    let documents = documents_db.fetch_for_task(task_id)?;

    if documents.is_empty() {
        msg_info!(Message::NoDocumentsFound(task_id));
        return Ok(());
    }

    msg_print!(Message::DocumentsHeader(task_id), true);
    View::documents(&documents)?;
    Ok(())
}

fn handle_download(id: i64, output: Option<PathBuf>) -> Result<()> {
    let mut documents_db = Documents::new()?;

    let document = match documents_db.get(id)? {
        Some(document) => document,
        None => {
            msg_error!(Message::DocumentNotFoundWithId(id));
            return Ok(());
        }
    };

    let config = Config::read()?;
    let storage = AttachmentStorage::new(config.attachments_or_default())?;

    // A missing file is its own failure mode, distinct from a missing
    // metadata row
    if !storage.exists(&document.stored_name) {
        msg_error!(Message::AttachmentFileMissing(document.original_name));
        return Ok(());
    }

    let destination = output.unwrap_or_else(|| PathBuf::from(&document.original_name));
    storage.retrieve(&document.stored_name, &destination)?;

    msg_success!(Message::DocumentDownloaded(destination.display().to_string()));
    Ok(())
}

fn handle_delete(id: i64) -> Result<()> {
    let mut documents_db = Documents::new()?;

    let document = match documents_db.get(id)? {
        Some(document) => document,
        None => {
            msg_error!(Message::DocumentNotFoundWithId(id));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteDocument(document.original_name.clone()).to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    // Metadata row first, bytes second
    documents_db.delete(id)?;

    let config = Config::read()?;
    let storage = AttachmentStorage::new(config.attachments_or_default())?;
    storage.remove(&document.stored_name)?;

    msg_success!(Message::DocumentDeleted(id));
    Ok(())
}

/// Best-effort content type from the file extension, the way the uploader
/// would report it.
fn content_type_of(file: &Path) -> Option<String> {
    let ext = file.extension()?.to_string_lossy().to_lowercase();
    let content_type = match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "json" => "application/json",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(content_type.to_string())
}
