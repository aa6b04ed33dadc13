use pretty_assertions::assert_eq;
use tempfile::TempDir;

use zest::io::storage::{FileStorage, Storage};
use zest::io::store_io::{self, TASKS_KEY};
use zest::model::task::Task;
use zest::model::theme::ThemeId;
use zest::ops::task_ops::{self, IdGen};

/// Fresh data dir: empty task list, default theme.
#[test]
fn fresh_directory_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();

    assert!(store_io::load_tasks(&storage).is_empty());
    assert_eq!(store_io::load_theme(&storage), ThemeId::Blue);
}

/// The startup-then-add scenario: load with no persisted data, add a task,
/// and verify the persisted state holds exactly that task.
#[test]
fn add_task_reaches_disk() {
    let dir = TempDir::new().unwrap();
    let mut storage = FileStorage::open(dir.path()).unwrap();

    let mut tasks = store_io::load_tasks(&storage);
    let mut ids = IdGen::seeded_from(&tasks);
    task_ops::add_task(&mut tasks, &mut ids, "Buy milk").unwrap();
    store_io::save_tasks(&mut storage, &tasks).unwrap();

    // Raw persisted JSON uses the fixed field names
    let raw = storage.get(TASKS_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["text"], "Buy milk");
    assert_eq!(value[0]["completed"], false);
    assert_eq!(value[0]["subtasks"], serde_json::json!([]));

    // A second session sees the same list
    let reloaded = store_io::load_tasks(&storage);
    assert_eq!(reloaded, tasks);
}

/// Full session round-trip: mutate across the whole op surface, reload, and
/// check ids still seed past everything that was created.
#[test]
fn session_round_trip_with_subtasks_and_reorder() {
    let dir = TempDir::new().unwrap();
    let mut storage = FileStorage::open(dir.path()).unwrap();

    let mut tasks: Vec<Task> = Vec::new();
    let mut ids = IdGen::new();

    let groceries = task_ops::add_task(&mut tasks, &mut ids, "Groceries").unwrap();
    let chores = task_ops::add_task(&mut tasks, &mut ids, "Chores").unwrap();
    let milk = task_ops::add_subtask(&mut tasks, &mut ids, groceries, "Milk").unwrap();
    let eggs = task_ops::add_subtask(&mut tasks, &mut ids, groceries, "Eggs").unwrap();
    task_ops::toggle_subtask(&mut tasks, groceries, milk).unwrap();
    task_ops::reorder_tasks(&mut tasks, 0, 1).unwrap(); // move "Chores" below
    store_io::save_tasks(&mut storage, &tasks).unwrap();
    store_io::save_theme(&mut storage, ThemeId::Green).unwrap();

    let reloaded = store_io::load_tasks(&storage);
    assert_eq!(reloaded, tasks);
    assert_eq!(reloaded[0].text, "Groceries");
    assert_eq!(reloaded[1].text, "Chores");
    assert!(!reloaded[0].completed, "one of two subtasks done");
    assert_eq!(store_io::load_theme(&storage), ThemeId::Green);

    let mut reseeded = IdGen::seeded_from(&reloaded);
    let next = reseeded.next_id();
    for id in [groceries, chores, milk, eggs] {
        assert!(next > id);
    }

    let _ = task_ops::toggle_subtask(&mut tasks, groceries, eggs).unwrap();
    assert!(tasks[0].completed, "all subtasks done derives the parent");
}

/// Corrupt persisted state must load as defaults, not fail.
#[test]
fn corrupt_state_is_treated_as_absent() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tasks"), "{{ not json").unwrap();
    std::fs::write(dir.path().join("theme"), "no-such-theme").unwrap();

    let storage = FileStorage::open(dir.path()).unwrap();
    assert!(store_io::load_tasks(&storage).is_empty());
    assert_eq!(store_io::load_theme(&storage), ThemeId::Blue);
}
