//! Whoami command - show the current session

use anyhow::Result;

use super::get_context;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    match ctx.auth_service.current_user() {
        Some(user) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&user)?);
            } else {
                println!("{} <{}>", user.name, user.email);
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                println!("No active session.");
            }
        }
    }
    Ok(())
}
