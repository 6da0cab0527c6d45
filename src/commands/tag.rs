use crate::{
    db::{tags::Tags, tasks::Tasks},
    libs::{messages::Message, task::TaskFilter, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    command: Option<TagCommand>,
}

#[derive(Debug, Subcommand)]
enum TagCommand {
    /// Show every tag with total and open task counts
    List,
    /// Show tasks carrying a specific tag
    Tasks {
        /// Tag name
        tag: String,
    },
}

pub fn cmd(args: TagArgs) -> Result<()> {
    match args.command {
        Some(TagCommand::Tasks { tag }) => handle_tasks(tag),
        Some(TagCommand::List) | None => handle_list(),
    }
}

fn handle_list() -> Result<()> {
    let mut tags_db = Tags::new()?;
    let summaries = tags_db.summarize()?;

    if summaries.is_empty() {
        msg_info!(Message::NoTagsFound);
        return Ok(());
    }

    msg_print!(Message::TagSummaryHeader, true);
    View::tag_summary(&summaries)?;
    Ok(())
}

fn handle_tasks(tag: String) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let tasks = tasks_db.fetch(&TaskFilter {
        tag: Some(tag.clone()),
        ..Default::default()
    })?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksWithTagHeader(tag.to_lowercase()), true);
    View::tasks(&tasks, Local::now().date_naive())?;
    Ok(())
}
