//! Login command - open a session

use anyhow::Result;

use super::{get_context, get_logger, log_event};
use crate::output;
use taskdeck_core::LogEvent;

pub fn run(email: &str, password: &str) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    match ctx.auth_service.login(email, password) {
        Ok(user) => {
            log_event(&logger, LogEvent::new("login").with_command("login"));
            output::success(&format!("Welcome back, {}!", user.name));
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("login_failed")
                    .with_command("login")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
