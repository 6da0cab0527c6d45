//! Database layer for the taskdock application.
//!
//! Provides the persistence layer built on SQLite: connection management,
//! versioned schema migrations, and one store module per table. Every store
//! operation is a single statement or a single transaction, so each call
//! either fully succeeds or leaves no trace.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdock::db::tasks::Tasks;
//! use taskdock::libs::task::{NewTask, TaskFilter};
//!
//! let mut tasks = Tasks::new()?;
//! tasks.create(NewTask::new("Review code"))?;
//! let open = tasks.fetch(&TaskFilter::open_only())?;
//! # anyhow::Ok(())
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens SQLite connections, enables foreign
/// key enforcement, and applies migrations.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes and tracks migration history.
pub mod migrations;

/// Document attachment metadata store.
///
/// Records metadata for per-task binary attachments; rows cascade with their
/// task, file bytes stay with the attachment storage collaborator.
pub mod documents;

/// Tag aggregation view.
///
/// Derives per-tag usage counts from the tag sets stored on tasks.
pub mod tags;

/// Core task management operations.
///
/// CRUD for tasks: creation, filtered and deterministically ordered listing,
/// partial updates, done-flag changes, and cascade-triggering deletion.
pub mod tasks;
