//! Built-in demo data provider
//!
//! Generates the fixed sample tasks the original application serves from
//! its demo endpoint: three Spanish-language tasks covering all three
//! default categories and both statuses, stamped with the current time.

use chrono::Utc;

use crate::domain::result::Result;
use crate::domain::{Task, TaskStatus};
use crate::ports::TaskFeedProvider;

/// Generate the demo task sequence
pub fn demo_tasks() -> Vec<Task> {
    let now = Utc::now();

    vec![
        Task {
            id: "demo-1".to_string(),
            title: "Revisar correos importantes".to_string(),
            description: "Responder a clientes y priorizar solicitudes pendientes.".to_string(),
            category_id: "work".to_string(),
            created_at: now,
            status: TaskStatus::Pending,
        },
        Task {
            id: "demo-2".to_string(),
            title: "Estudiar Next.js App Router".to_string(),
            description: "Repasar routing, layouts anidados y APIs internas.".to_string(),
            category_id: "study".to_string(),
            created_at: now,
            status: TaskStatus::Pending,
        },
        Task {
            id: "demo-3".to_string(),
            title: "Tiempo personal".to_string(),
            description: "Salir a caminar 30 minutos para despejar la mente.".to_string(),
            category_id: "personal".to_string(),
            created_at: now,
            status: TaskStatus::Completed,
        },
    ]
}

/// Demo task provider
///
/// Implements the task feed port with the built-in sample data, for use
/// when no demo endpoint is configured.
pub struct DemoTaskProvider;

impl DemoTaskProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DemoTaskProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFeedProvider for DemoTaskProvider {
    fn name(&self) -> &str {
        "demo"
    }

    fn fetch_tasks(&self) -> Result<Vec<Task>> {
        Ok(demo_tasks())
    }
}
