//! Task service - tasks and categories
//!
//! Tasks and categories live in two dedicated store slots, reloaded and
//! fully rewritten on every mutation. Categories are lazily seeded with
//! three defaults on the first read that finds the slot empty.

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::{default_categories, Category, Task};
use crate::ports::{parse_or_default, KeyValueStore};

const TASKS_KEY: &str = "task-manager.tasks";
const CATEGORIES_KEY: &str = "task-manager.categories";

/// Task service for tasks and categories
pub struct TaskService {
    store: Arc<dyn KeyValueStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All categories, seeding the defaults on first read
    ///
    /// When the stored collection is empty (including never initialized),
    /// the three default categories are written to the store and returned.
    /// When the store is unavailable the defaults are returned without
    /// being persisted.
    pub fn get_categories(&self) -> Vec<Category> {
        if !self.store.is_available() {
            return default_categories();
        }
        let stored: Vec<Category> = parse_or_default(self.store.get(CATEGORIES_KEY), Vec::new());
        if stored.is_empty() {
            let defaults = default_categories();
            if let Ok(raw) = serde_json::to_string(&defaults) {
                let _ = self.store.set(CATEGORIES_KEY, &raw);
            }
            return defaults;
        }
        stored
    }

    /// Upsert a category by id, preserving list position
    pub fn save_category(&self, category: &Category) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut categories = self.get_categories();
        if let Some(existing) = categories.iter_mut().find(|c| c.id == category.id) {
            *existing = category.clone();
        } else {
            categories.push(category.clone());
        }
        self.store
            .set(CATEGORIES_KEY, &serde_json::to_string(&categories)?)
    }

    /// All tasks
    ///
    /// Empty when the store is unavailable or its content is unparsable.
    pub fn get_tasks(&self) -> Vec<Task> {
        if !self.store.is_available() {
            return Vec::new();
        }
        parse_or_default(self.store.get(TASKS_KEY), Vec::new())
    }

    /// Upsert a task by id, preserving list position
    pub fn save_task(&self, task: &Task) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut tasks = self.get_tasks();
        if let Some(existing) = tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task.clone();
        } else {
            tasks.push(task.clone());
        }
        self.store.set(TASKS_KEY, &serde_json::to_string(&tasks)?)
    }

    /// Remove the task with the given id, if present
    pub fn delete_task(&self, task_id: &str) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut tasks = self.get_tasks();
        tasks.retain(|t| t.id != task_id);
        self.store.set(TASKS_KEY, &serde_json::to_string(&tasks)?)
    }

    /// Flip pending <-> completed for the task with the given id
    ///
    /// No-op when the id is not found.
    pub fn toggle_task_status(&self, task_id: &str) -> Result<()> {
        if !self.store.is_available() {
            return Ok(());
        }
        let mut tasks = self.get_tasks();
        for task in tasks.iter_mut().filter(|t| t.id == task_id) {
            task.status = task.status.toggled();
        }
        self.store.set(TASKS_KEY, &serde_json::to_string(&tasks)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::domain::TaskStatus;

    fn service() -> TaskService {
        TaskService::new(Arc::new(MemoryStore::new()))
    }

    fn task(id: &str, title: &str) -> Task {
        Task::new(id, title, "", "work")
    }

    #[test]
    fn test_fresh_store_seeds_exactly_the_three_defaults_once() {
        let tasks = service();

        let first = tasks.get_categories();
        let names: Vec<&str> = first.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Trabajo", "Personal", "Estudio"]);

        // A second read must not duplicate the seeded rows
        let second = tasks.get_categories();
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_category_upserts_by_id() {
        let tasks = service();
        tasks
            .save_category(&Category::new("home", "Casa"))
            .unwrap();
        assert_eq!(tasks.get_categories().len(), 4);

        tasks
            .save_category(&Category::new("home", "Hogar"))
            .unwrap();
        let categories = tasks.get_categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[3].name, "Hogar");
    }

    #[test]
    fn test_save_task_upsert_is_idempotent() {
        let tasks = service();
        let t = task("t-1", "Estudiar");

        tasks.save_task(&t).unwrap();
        tasks.save_task(&t).unwrap();
        assert_eq!(tasks.get_tasks(), vec![t]);
    }

    #[test]
    fn test_save_task_replaces_in_place() {
        let tasks = service();
        tasks.save_task(&task("t-1", "Primero")).unwrap();
        tasks.save_task(&task("t-2", "Segundo")).unwrap();

        let mut edited = task("t-1", "Primero (editado)");
        edited.description = "con detalle".to_string();
        tasks.save_task(&edited).unwrap();

        let stored = tasks.get_tasks();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].title, "Primero (editado)");
        assert_eq!(stored[1].id, "t-2");
    }

    #[test]
    fn test_delete_task_removes_only_the_matching_id() {
        let tasks = service();
        tasks.save_task(&task("t-1", "uno")).unwrap();
        tasks.save_task(&task("t-2", "dos")).unwrap();

        tasks.delete_task("t-1").unwrap();
        let stored = tasks.get_tasks();
        assert!(stored.iter().all(|t| t.id != "t-1"));
        assert_eq!(stored.len(), 1);

        // Deleting a nonexistent id leaves the collection unchanged
        tasks.delete_task("missing").unwrap();
        assert_eq!(tasks.get_tasks(), stored);
    }

    #[test]
    fn test_toggle_task_status_is_its_own_inverse() {
        let tasks = service();
        tasks.save_task(&task("t-1", "uno")).unwrap();

        tasks.toggle_task_status("t-1").unwrap();
        assert_eq!(tasks.get_tasks()[0].status, TaskStatus::Completed);

        tasks.toggle_task_status("t-1").unwrap();
        assert_eq!(tasks.get_tasks()[0].status, TaskStatus::Pending);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_no_op() {
        let tasks = service();
        tasks.save_task(&task("t-1", "uno")).unwrap();
        let before = tasks.get_tasks();

        tasks.toggle_task_status("missing").unwrap();
        assert_eq!(tasks.get_tasks(), before);
    }

    #[test]
    fn test_unavailable_store_degrades_to_defaults_and_no_ops() {
        let tasks = TaskService::new(Arc::new(MemoryStore::unavailable()));

        assert!(tasks.get_tasks().is_empty());
        assert_eq!(tasks.get_categories(), default_categories());

        tasks.save_task(&task("t-1", "uno")).unwrap();
        tasks.delete_task("t-1").unwrap();
        tasks.toggle_task_status("t-1").unwrap();
        assert!(tasks.get_tasks().is_empty());
    }

    #[test]
    fn test_malformed_stored_tasks_are_treated_as_absent() {
        let store = Arc::new(MemoryStore::new());
        store.set(TASKS_KEY, "[{broken").unwrap();
        let tasks = TaskService::new(store);
        assert!(tasks.get_tasks().is_empty());
    }
}
