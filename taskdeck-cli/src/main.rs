//! Taskdeck CLI - your tasks in the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{
    add, category, demo, edit, list, login, logout, logs, register, rm, status, toggle, whoami,
};

/// Taskdeck - your tasks in the terminal
#[derive(Parser)]
#[command(name = "td", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and open a session
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address (unique)
        #[arg(long)]
        email: String,
        /// Password (plain text, stored as-is)
        #[arg(long)]
        password: String,
    },

    /// Open a session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Close the current session
    Logout,

    /// Show the current session
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Category id (defaults to the first category)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit a task's title or description
    Edit {
        /// Task id
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// List tasks
    List {
        /// Match against title or description (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Filter by category id
        #[arg(long)]
        category: Option<String>,
        /// Filter by status: pending, completed or all
        #[arg(long, default_value = "all")]
        status: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle a task between pending and completed
    Toggle {
        /// Task id
        id: String,
    },

    /// Remove a task
    Rm {
        /// Task id
        id: String,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        command: category::CategoryCommands,
    },

    /// Load sample tasks from the demo feed
    Demo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show collection counts and session state
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent activity log entries
    Logs {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register { name, email, password } => register::run(&name, &email, &password),
        Commands::Login { email, password } => login::run(&email, &password),
        Commands::Logout => logout::run(),
        Commands::Whoami { json } => whoami::run(json),
        Commands::Add { title, description, category } => {
            add::run(&title, &description, category.as_deref())
        }
        Commands::Edit { id, title, description } => {
            edit::run(&id, title.as_deref(), description.as_deref())
        }
        Commands::List { search, category, status, json } => {
            list::run(search.as_deref(), category.as_deref(), &status, json)
        }
        Commands::Toggle { id } => toggle::run(&id),
        Commands::Rm { id } => rm::run(&id),
        Commands::Category { command } => category::run(command),
        Commands::Demo { json } => demo::run(json),
        Commands::Status { json } => status::run(json),
        Commands::Logs { limit, json } => logs::run(limit, json),
    }
}
