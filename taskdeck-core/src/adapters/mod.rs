//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Local filesystem for the KeyValueStore port
//! - In-memory map for the KeyValueStore port (tests, embedding)
//! - Built-in demo data for the TaskFeedProvider port
//! - Blocking HTTP client for the TaskFeedProvider port

pub mod demo;
pub mod local_store;
pub mod memory;
pub mod task_api;

pub use demo::{demo_tasks, DemoTaskProvider};
pub use local_store::LocalStore;
pub use memory::MemoryStore;
pub use task_api::TaskApiClient;
