//! List command - filtered task listing

use std::collections::HashMap;

use anyhow::Result;
use colored::Colorize;

use super::{get_context, require_session};
use crate::output;
use taskdeck_core::{filter_tasks, StatusFilter, TaskFilterOptions, TaskStatus};

pub fn run(search: Option<&str>, category: Option<&str>, status: &str, json: bool) -> Result<()> {
    let status: StatusFilter = status.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let ctx = get_context()?;
    require_session(&ctx)?;

    let options = TaskFilterOptions {
        search_text: search.map(str::to_string),
        category_id: category.map(str::to_string),
        status,
    };
    let tasks = filter_tasks(&ctx.task_service.get_tasks(), &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    let category_names: HashMap<String, String> = ctx
        .task_service
        .get_categories()
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    let mut table = output::create_table();
    table.set_header(vec!["Id", "Title", "Description", "Category", "Status", "Created"]);

    for task in &tasks {
        let status = match task.status {
            TaskStatus::Pending => "pending".yellow().to_string(),
            TaskStatus::Completed => "completed".green().to_string(),
        };
        table.add_row(vec![
            task.id.clone(),
            task.title.clone(),
            task.description.clone(),
            category_names
                .get(&task.category_id)
                .cloned()
                .unwrap_or_else(|| task.category_id.clone()),
            status,
            task.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{}", table);
    Ok(())
}
