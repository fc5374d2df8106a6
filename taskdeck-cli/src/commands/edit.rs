//! Edit command - change a task's title or description

use anyhow::Result;

use super::{get_context, require_session};
use crate::output;

pub fn run(id: &str, title: Option<&str>, description: Option<&str>) -> Result<()> {
    if title.is_none() && description.is_none() {
        anyhow::bail!("Nothing to change: pass --title and/or --description");
    }
    if let Some(title) = title {
        // The dashboard refuses to save an edit with an empty title
        if title.is_empty() {
            anyhow::bail!("Title must not be empty");
        }
    }

    let ctx = get_context()?;
    require_session(&ctx)?;

    let mut task = ctx
        .task_service
        .get_tasks()
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| anyhow::anyhow!("No task with id {id}"))?;

    if let Some(title) = title {
        task.title = title.to_string();
    }
    if let Some(description) = description {
        task.description = description.to_string();
    }
    ctx.task_service.save_task(&task)?;

    output::success(&format!("Updated task {}", task.id));
    Ok(())
}
