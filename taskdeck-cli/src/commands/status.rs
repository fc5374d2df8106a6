//! Status command - collection counts and session state

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;
use taskdeck_core::TaskStatus;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let tasks = ctx.task_service.get_tasks();
    let categories = ctx.task_service.get_categories();
    let users = ctx.auth_service.get_users();
    let current_user = ctx.auth_service.current_user();
    let pending = tasks.iter().filter(|t| t.status == TaskStatus::Pending).count();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "tasks": tasks.len(),
                "pending": pending,
                "completed": tasks.len() - pending,
                "categories": categories.len(),
                "users": users.len(),
                "session": current_user.map(|u| u.email),
            })
        );
        return Ok(());
    }

    println!("{}", "Taskdeck Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Tasks", &tasks.len().to_string()]);
    table.add_row(vec!["Pending", &pending.to_string()]);
    table.add_row(vec!["Completed", &(tasks.len() - pending).to_string()]);
    table.add_row(vec!["Categories", &categories.len().to_string()]);
    table.add_row(vec!["Users", &users.len().to_string()]);
    println!("{}", table);
    println!();

    match current_user {
        Some(user) => println!("Session: {} <{}>", user.name, user.email),
        None => println!("Session: none"),
    }
    Ok(())
}
