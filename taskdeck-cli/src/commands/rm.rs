//! Rm command - remove a task

use anyhow::Result;

use super::{get_context, require_session};
use crate::output;

pub fn run(id: &str) -> Result<()> {
    let ctx = get_context()?;
    require_session(&ctx)?;

    ctx.task_service.delete_task(id)?;
    output::success(&format!("Removed task {id}"));
    Ok(())
}
