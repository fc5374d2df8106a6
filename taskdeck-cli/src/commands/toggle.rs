//! Toggle command - flip a task between pending and completed

use anyhow::Result;

use super::{get_context, require_session};
use crate::output;

pub fn run(id: &str) -> Result<()> {
    let ctx = get_context()?;
    require_session(&ctx)?;

    let known = ctx.task_service.get_tasks().iter().any(|t| t.id == id);
    if !known {
        anyhow::bail!("No task with id {id}");
    }

    ctx.task_service.toggle_task_status(id)?;

    let status = ctx
        .task_service
        .get_tasks()
        .into_iter()
        .find(|t| t.id == id)
        .map(|t| t.status.as_str())
        .unwrap_or("unknown");
    output::success(&format!("Task {id} is now {status}"));
    Ok(())
}
