//! Integration tests for taskdeck-core services
//!
//! These tests run the repositories against a real file-backed store in a
//! temporary directory; only the task feed is substituted at the trait
//! level.

use std::sync::Arc;

use tempfile::TempDir;
use uuid::Uuid;

use taskdeck_core::adapters::{DemoTaskProvider, LocalStore};
use taskdeck_core::domain::result::Error;
use taskdeck_core::ports::KeyValueStore;
use taskdeck_core::services::{AuthService, DemoService, TaskService};
use taskdeck_core::{filter_tasks, StatusFilter, Task, TaskFilterOptions, TaskStatus};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a file-backed store rooted in the temp dir
fn create_store(temp_dir: &TempDir) -> Arc<LocalStore> {
    Arc::new(LocalStore::new(temp_dir.path().join("store")))
}

fn auth(store: &Arc<LocalStore>) -> AuthService {
    AuthService::new(Arc::clone(store) as Arc<dyn KeyValueStore>)
}

fn tasks(store: &Arc<LocalStore>) -> TaskService {
    TaskService::new(Arc::clone(store) as Arc<dyn KeyValueStore>)
}

/// Create a pending task with a fresh id
fn create_task(title: &str, description: &str, category_id: &str) -> Task {
    Task::new(Uuid::new_v4().to_string(), title, description, category_id)
}

// ============================================================================
// Auth flow
// ============================================================================

#[test]
fn test_register_login_logout_flow_persists_across_service_instances() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);

    let registered = auth(&store)
        .register("Ana", "ana@example.com", "secret")
        .unwrap();

    // A fresh service over the same directory sees the same state
    let service = auth(&store);
    assert_eq!(service.current_user(), Some(registered.clone()));

    service.logout().unwrap();
    assert_eq!(service.current_user(), None);

    let logged_in = service.login("ana@example.com", "secret").unwrap();
    assert_eq!(logged_in.id, registered.id);
    assert_eq!(service.current_user(), Some(logged_in));
}

#[test]
fn test_duplicate_registration_fails_without_touching_the_user_list() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    let service = auth(&store);

    service.register("Ana", "ana@example.com", "secret").unwrap();
    let before = service.get_users();

    let err = service.register("Impostor", "ana@example.com", "other").unwrap_err();
    assert!(matches!(err, Error::DuplicateEmail { .. }));
    assert_eq!(service.get_users(), before);
}

#[test]
fn test_login_with_wrong_password_fails_and_leaves_no_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    let service = auth(&store);

    service.register("Ana", "ana@example.com", "secret").unwrap();
    service.logout().unwrap();

    let err = service.login("ana@example.com", "nope").unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials));
    assert_eq!(service.current_user(), None);
}

// ============================================================================
// Task and category lifecycle
// ============================================================================

#[test]
fn test_category_seeding_happens_once_and_survives_reloads() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);

    let first = tasks(&store).get_categories();
    let ids: Vec<&str> = first.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["work", "personal", "study"]);

    // Re-reading through a fresh service must not re-seed
    let second = tasks(&store).get_categories();
    assert_eq!(first, second);
}

#[test]
fn test_task_lifecycle_create_toggle_delete() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    let service = tasks(&store);

    let task = create_task("Estudiar Next.js", "Revisar App Router", "study");
    service.save_task(&task).unwrap();

    service.toggle_task_status(&task.id).unwrap();
    assert_eq!(service.get_tasks()[0].status, TaskStatus::Completed);
    service.toggle_task_status(&task.id).unwrap();
    assert_eq!(service.get_tasks()[0].status, TaskStatus::Pending);

    service.delete_task(&task.id).unwrap();
    assert!(service.get_tasks().is_empty());
}

#[test]
fn test_saved_tasks_filter_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    let service = tasks(&store);

    service
        .save_task(&create_task("Estudiar Next.js", "Revisar App Router", "study"))
        .unwrap();
    service
        .save_task(&create_task("Hacer ejercicio", "Salir a caminar 30 minutos", "personal"))
        .unwrap();
    let work_task = create_task("Revisar correos", "Responder mensajes", "work");
    service.save_task(&work_task).unwrap();

    let stored = service.get_tasks();

    let found = filter_tasks(
        &stored,
        &TaskFilterOptions {
            search_text: Some("revisar".to_string()),
            category_id: Some("work".to_string()),
            status: StatusFilter::Pending,
        },
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, work_task.id);
}

#[test]
fn test_malformed_store_content_is_treated_as_absent() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);

    store.set("task-manager.tasks", "{broken json").unwrap();
    store.set("task-manager.current-user", "also broken").unwrap();

    assert!(tasks(&store).get_tasks().is_empty());
    assert_eq!(auth(&store).current_user(), None);

    // Writing over the broken slot works normally afterwards
    let service = tasks(&store);
    service.save_task(&create_task("uno", "", "work")).unwrap();
    assert_eq!(service.get_tasks().len(), 1);
}

// ============================================================================
// Demo data
// ============================================================================

#[test]
fn test_demo_load_is_idempotent_and_visible_to_the_task_service() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);

    let demo = DemoService::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
    let result = demo.load(&DemoTaskProvider::new()).unwrap();
    assert_eq!(result.loaded, 3);

    // Loading again upserts in place instead of duplicating
    demo.load(&DemoTaskProvider::new()).unwrap();

    let stored = tasks(&store).get_tasks();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().any(|t| t.id == "demo-1" && t.category_id == "work"));
    assert!(stored.iter().any(|t| t.id == "demo-3" && t.status == TaskStatus::Completed));
}

#[test]
fn test_demo_tasks_can_coexist_with_user_tasks() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    let service = tasks(&store);

    let mine = create_task("Tarea propia", "", "personal");
    service.save_task(&mine).unwrap();

    DemoService::new(Arc::clone(&store) as Arc<dyn KeyValueStore>)
        .load(&DemoTaskProvider::new())
        .unwrap();

    let stored = service.get_tasks();
    assert_eq!(stored.len(), 4);
    // Input order is preserved: user task first, then the feed
    assert_eq!(stored[0].id, mine.id);
}
