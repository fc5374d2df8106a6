//! Task feed port - external demo data abstraction

use crate::domain::result::Result;
use crate::domain::Task;

/// Read-only provider of sample task records
///
/// Implementations (adapters) fetch a fixed-shape sequence of tasks from
/// some external collaborator. The task repository accepts any well-formed
/// tasks obtained this way and upserts them one by one.
pub trait TaskFeedProvider {
    /// Short provider name for messages and logs
    fn name(&self) -> &str;

    /// Fetch the full sample task sequence
    fn fetch_tasks(&self) -> Result<Vec<Task>>;
}
