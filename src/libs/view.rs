use super::document::Document;
use super::task::{DueStatus, Task};
use crate::db::tags::TagSummary;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints a task table preceded by a one-line count summary.
    pub fn tasks(tasks: &[Task], today: NaiveDate) -> Result<()> {
        let total = tasks.len();
        let open = tasks.iter().filter(|t| !t.done).count();
        let overdue = tasks.iter().filter(|t| !t.done && t.due_status_on(today) == DueStatus::Overdue).count();
        let due_today = tasks.iter().filter(|t| !t.done && t.due_status_on(today) == DueStatus::Today).count();

        msg_print!(Message::TaskListSummary {
            total,
            open,
            done: total - open,
            overdue,
            due_today,
        });

        let mut table = Table::new();
        table.add_row(row!["ID", "DONE", "PRIO", "DUE", "STATUS", "TITLE", "TAGS", "NOTES"]);
        for task in tasks {
            let status = match task.due_status_on(today) {
                DueStatus::None => "-",
                DueStatus::Invalid => "invalid",
                DueStatus::Overdue => "overdue",
                DueStatus::Today => "today",
                DueStatus::Future => "future",
            };
            table.add_row(row![
                task.id.unwrap_or(0),
                if task.done { "x" } else { " " },
                task.priority,
                task.due_date.as_deref().unwrap_or("-"),
                status,
                task.title,
                task.tags.join(","),
                task.notes.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn documents(documents: &[Document]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "TYPE", "SIZE", "CREATED"]);
        for doc in documents {
            table.add_row(row![
                doc.id.unwrap_or(0),
                doc.original_name,
                doc.content_type.as_deref().unwrap_or("-"),
                doc.size.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
                doc.created_at.as_deref().unwrap_or("-")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tag_summary(summaries: &[TagSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TAG", "TOTAL", "OPEN"]);
        for summary in summaries {
            table.add_row(row![summary.name, summary.total, summary.open]);
        }
        table.printstd();

        Ok(())
    }
}
