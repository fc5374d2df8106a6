//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! and pure functions - no I/O or external dependencies.

mod category;
mod filter;
mod task;
mod user;
pub mod result;

pub use category::{default_categories, Category};
pub use filter::{filter_tasks, StatusFilter, TaskFilterOptions};
pub use task::{Task, TaskStatus};
pub use user::User;
