//! Task domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The opposite state (pending <-> completed)
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A single task
///
/// Ids are plain strings: generated ids are UUIDs, but seeded data uses
/// fixed literals like `demo-1`. `category_id` is a soft reference to a
/// [`Category`](crate::domain::Category); no referential integrity is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category_id: String,
    pub created_at: DateTime<Utc>,
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task stamped with the current time
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category_id: category_id.into(),
            created_at: Utc::now(),
            status: TaskStatus::Pending,
        }
    }
}
