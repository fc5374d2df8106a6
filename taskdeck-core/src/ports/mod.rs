//! Port definitions
//!
//! Ports are the trait boundaries between the core and the outside world:
//! the key-value store the repositories persist into, and the task feed
//! the demo loader pulls from.

pub mod key_value_store;
pub mod task_feed;

pub use key_value_store::{parse_or_default, KeyValueStore};
pub use task_feed::TaskFeedProvider;
