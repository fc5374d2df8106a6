//! Add command - create a task

use anyhow::Result;
use uuid::Uuid;

use super::{get_context, require_session};
use crate::output;
use taskdeck_core::Task;

pub fn run(title: &str, description: &str, category: Option<&str>) -> Result<()> {
    if title.is_empty() {
        anyhow::bail!("Title must not be empty");
    }

    let ctx = get_context()?;
    require_session(&ctx)?;

    // Default to the first category, as the dashboard form preselects it
    let category_id = match category {
        Some(id) => id.to_string(),
        None => {
            let categories = ctx.task_service.get_categories();
            categories
                .first()
                .map(|c| c.id.clone())
                .unwrap_or_else(|| "work".to_string())
        }
    };

    let task = Task::new(Uuid::new_v4().to_string(), title, description, category_id);
    ctx.task_service.save_task(&task)?;

    output::success(&format!("Added task {} ({})", task.title, task.id));
    Ok(())
}
