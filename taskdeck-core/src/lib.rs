//! Taskdeck Core - business logic for a local-first task manager
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Task, Category, User) and the task filter
//! - **ports**: Trait definitions for external dependencies (KeyValueStore, TaskFeedProvider)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (local files, in-memory, demo feed, HTTP feed)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{local_store, DemoTaskProvider, LocalStore, TaskApiClient};
use config::Config;
use ports::{KeyValueStore, TaskFeedProvider};
use services::{AuthService, DemoService, TaskService};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    filter_tasks, Category, StatusFilter, Task, TaskFilterOptions, TaskStatus, User,
};
pub use services::{DemoLoadResult, EntryPoint, LogEvent, LoggingService};

/// Main context for Taskdeck operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the storage adapter, and all services.
pub struct TaskdeckContext {
    pub config: Config,
    pub store: Arc<LocalStore>,
    pub auth_service: AuthService,
    pub task_service: TaskService,
    pub demo_service: DemoService,
}

impl TaskdeckContext {
    /// Create a new Taskdeck context rooted at the given directory
    pub fn new(taskdeck_dir: &Path) -> Result<Self> {
        let config = Config::load(taskdeck_dir)?;

        let store = Arc::new(LocalStore::new(local_store::store_dir(taskdeck_dir)));

        let auth_service =
            AuthService::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        let task_service =
            TaskService::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        let demo_service =
            DemoService::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);

        Ok(Self {
            config,
            store,
            auth_service,
            task_service,
            demo_service,
        })
    }

    /// The task feed provider selected by configuration
    ///
    /// The configured HTTP endpoint when set, the built-in demo data
    /// otherwise.
    pub fn task_feed(&self) -> domain::result::Result<Box<dyn TaskFeedProvider>> {
        match self.config.demo_url.as_deref() {
            Some(url) => Ok(Box::new(TaskApiClient::new(url)?)),
            None => Ok(Box::new(DemoTaskProvider::new())),
        }
    }
}
