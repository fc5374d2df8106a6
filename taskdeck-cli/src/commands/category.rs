//! Category command - manage categories

use anyhow::Result;
use clap::Subcommand;
use uuid::Uuid;

use super::{get_context, require_session};
use crate::output;
use taskdeck_core::Category;

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
    /// List categories
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: CategoryCommands) -> Result<()> {
    let ctx = get_context()?;
    require_session(&ctx)?;

    match command {
        CategoryCommands::Add { name } => {
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("Category name must not be empty");
            }
            let category = Category::new(Uuid::new_v4().to_string(), name);
            ctx.task_service.save_category(&category)?;
            output::success(&format!("Added category {} ({})", category.name, category.id));
            Ok(())
        }
        CategoryCommands::List { json } => {
            let categories = ctx.task_service.get_categories();

            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Id", "Name"]);
            for category in &categories {
                table.add_row(vec![category.id.clone(), category.name.clone()]);
            }
            println!("{}", table);
            Ok(())
        }
    }
}
