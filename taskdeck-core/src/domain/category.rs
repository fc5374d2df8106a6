//! Category domain model

use serde::{Deserialize, Serialize};

/// A task category
///
/// Categories are never deleted in this design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The three categories seeded on first read of an empty store
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("work", "Trabajo"),
        Category::new("personal", "Personal"),
        Category::new("study", "Estudio"),
    ]
}
