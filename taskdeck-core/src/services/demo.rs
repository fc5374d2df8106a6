//! Demo service - sample data loading
//!
//! Pulls the sample task sequence from a task feed provider and upserts
//! every record through the task service, so demo data can be loaded
//! repeatedly without duplication.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::ports::{KeyValueStore, TaskFeedProvider};
use crate::services::TaskService;

/// Demo service for loading sample tasks
pub struct DemoService {
    tasks: TaskService,
}

impl DemoService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            tasks: TaskService::new(store),
        }
    }

    /// Fetch every task from the provider and upsert it into the store
    pub fn load(&self, provider: &dyn TaskFeedProvider) -> Result<DemoLoadResult> {
        let fetched = provider.fetch_tasks()?;
        for task in &fetched {
            self.tasks.save_task(task)?;
        }
        Ok(DemoLoadResult {
            provider: provider.name().to_string(),
            loaded: fetched.len(),
        })
    }
}

/// Result of a demo load
#[derive(Debug, Serialize)]
pub struct DemoLoadResult {
    pub provider: String,
    pub loaded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{DemoTaskProvider, MemoryStore};

    #[test]
    fn test_load_upserts_all_provider_tasks() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let demo = DemoService::new(Arc::clone(&store));

        let result = demo.load(&DemoTaskProvider::new()).unwrap();
        assert_eq!(result.provider, "demo");
        assert_eq!(result.loaded, 3);

        let tasks = TaskService::new(store).get_tasks();
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn test_repeated_load_does_not_duplicate() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let demo = DemoService::new(Arc::clone(&store));

        demo.load(&DemoTaskProvider::new()).unwrap();
        demo.load(&DemoTaskProvider::new()).unwrap();

        assert_eq!(TaskService::new(store).get_tasks().len(), 3);
    }
}
