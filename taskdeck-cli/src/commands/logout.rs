//! Logout command - close the current session

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run() -> Result<()> {
    let ctx = get_context()?;
    ctx.auth_service.logout()?;
    output::info("Session closed.");
    Ok(())
}
