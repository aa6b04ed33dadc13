use std::io;

use crate::io::storage::Storage;
use crate::model::task::Task;
use crate::model::theme::ThemeId;

/// Storage key holding the JSON-serialized task list
pub const TASKS_KEY: &str = "tasks";
/// Storage key holding the selected theme's string key
pub const THEME_KEY: &str = "theme";

/// Load the task list. A missing or malformed value loads as an empty list,
/// never as an error.
pub fn load_tasks(storage: &dyn Storage) -> Vec<Task> {
    storage
        .get(TASKS_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Persist the full task list. Called after every mutation.
pub fn save_tasks(storage: &mut dyn Storage, tasks: &[Task]) -> io::Result<()> {
    let json = serde_json::to_string(tasks)?;
    storage.set(TASKS_KEY, &json)
}

/// Load the selected theme. Missing or unknown keys load as the default.
pub fn load_theme(storage: &dyn Storage) -> ThemeId {
    storage
        .get(THEME_KEY)
        .and_then(|key| ThemeId::from_key(key.trim()))
        .unwrap_or_default()
}

/// Persist the theme selection.
pub fn save_theme(storage: &mut dyn Storage, theme: ThemeId) -> io::Result<()> {
    storage.set(THEME_KEY, theme.key())
}
