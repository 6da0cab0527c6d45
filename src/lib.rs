//! # Taskdock - personal task tracking with document attachments
//!
//! A command-line utility for managing a personal task list with priorities,
//! due dates, free-text notes, tags, and per-task binary document storage.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, filter and complete tasks
//! - **Deterministic Queue**: Listing orders by priority, due date, then age
//! - **Tag System**: Free-form tags normalized into a canonical set
//! - **Document Attachments**: Files stored under opaque names per task
//! - **Tag Overview**: Per-tag totals and open counts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdock::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
