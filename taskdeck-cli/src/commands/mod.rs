//! CLI command implementations

pub mod add;
pub mod category;
pub mod demo;
pub mod edit;
pub mod list;
pub mod login;
pub mod logout;
pub mod logs;
pub mod register;
pub mod rm;
pub mod status;
pub mod toggle;
pub mod whoami;

use std::path::PathBuf;

use anyhow::{Context, Result};
use taskdeck_core::{EntryPoint, LogEvent, LoggingService, TaskdeckContext, User};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let taskdeck_dir = get_taskdeck_dir();
    std::fs::create_dir_all(&taskdeck_dir).ok()?;
    LoggingService::new(&taskdeck_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the taskdeck directory from environment or default
pub fn get_taskdeck_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TASKDECK_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".taskdeck")
    }
}

/// Get or create the taskdeck context
pub fn get_context() -> Result<TaskdeckContext> {
    let taskdeck_dir = get_taskdeck_dir();

    std::fs::create_dir_all(&taskdeck_dir)
        .with_context(|| format!("Failed to create taskdeck directory: {:?}", taskdeck_dir))?;

    TaskdeckContext::new(&taskdeck_dir).context("Failed to initialize taskdeck context")
}

/// Require an open session, mirroring the dashboard's login guard
pub fn require_session(ctx: &TaskdeckContext) -> Result<User> {
    ctx.auth_service
        .current_user()
        .context("No active session. Run 'td login' or 'td register' first.")
}
