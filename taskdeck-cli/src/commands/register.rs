//! Register command - create an account and open a session

use anyhow::Result;

use super::{get_context, get_logger, log_event};
use crate::output;
use taskdeck_core::LogEvent;

pub fn run(name: &str, email: &str, password: &str) -> Result<()> {
    // Same form validation as the original register page
    if name.is_empty() || email.is_empty() || password.is_empty() {
        anyhow::bail!("Name, email and password are all required");
    }
    if password.len() < 4 {
        anyhow::bail!("Password must be at least 4 characters");
    }

    let ctx = get_context()?;
    let logger = get_logger();

    match ctx.auth_service.register(name, email, password) {
        Ok(user) => {
            log_event(&logger, LogEvent::new("register").with_command("register"));
            output::success(&format!("Welcome, {}! Session opened.", user.name));
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("register_failed")
                    .with_command("register")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}
