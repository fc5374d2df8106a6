//! Task filtering
//!
//! A pure conjunction of three optional predicates (text, category, status)
//! over a task list. The result is always a stable, order-preserving
//! subsequence of the input.

use serde::{Deserialize, Serialize};

use crate::domain::{Task, TaskStatus};

/// Status predicate for [`filter_tasks`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    fn matches(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::Completed => status == TaskStatus::Completed,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(format!(
                "unknown status '{other}' (expected pending, completed or all)"
            )),
        }
    }
}

/// Filter options
///
/// Every field is optional: an absent field (or an empty/whitespace search
/// text, or an empty category id) makes its predicate vacuously true.
#[derive(Debug, Clone, Default)]
pub struct TaskFilterOptions {
    pub search_text: Option<String>,
    pub category_id: Option<String>,
    pub status: StatusFilter,
}

/// Select the tasks matching all three predicates, preserving input order
///
/// The search text is trimmed and compared case-insensitively as a substring
/// of the title or the description.
pub fn filter_tasks(tasks: &[Task], options: &TaskFilterOptions) -> Vec<Task> {
    let normalized_search = options
        .search_text
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    let category_id = options.category_id.as_deref().unwrap_or("");

    tasks
        .iter()
        .filter(|task| {
            let matches_search = normalized_search.is_empty()
                || task.title.to_lowercase().contains(&normalized_search)
                || task.description.to_lowercase().contains(&normalized_search);

            let matches_category = category_id.is_empty() || task.category_id == category_id;

            let matches_status = options.status.matches(task.status);

            matches_search && matches_category && matches_status
        })
        .cloned()
        .collect()
}
