//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod auth;
mod demo;
pub mod logging;
mod tasks;

pub use auth::AuthService;
pub use demo::{DemoLoadResult, DemoService};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use tasks::TaskService;
