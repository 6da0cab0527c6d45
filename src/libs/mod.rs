//! Core library modules for the taskdock application.
//!
//! Serves as the main entry point for all taskdock library components:
//! domain types for tasks and documents, the tag normalizer, attachment
//! file storage, configuration, messaging, and console rendering.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdock::db::tasks::Tasks;
//! use taskdock::libs::task::NewTask;
//!
//! let mut tasks_db = Tasks::new()?;
//! let task = tasks_db.create(NewTask::new("Buy milk"))?;
//! # anyhow::Ok(())
//! ```

pub mod attachments;
pub mod config;
pub mod data_storage;
pub mod document;
pub mod error;
pub mod messages;
pub mod tags;
pub mod task;
pub mod view;
