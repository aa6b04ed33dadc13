use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{App, EditTarget, FlatItem, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything except its own dismissal
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.flat_items().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.cursor = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.flat_items().len();
            app.cursor = len.saturating_sub(1);
        }
        KeyCode::Tab | KeyCode::Enter => {
            toggle_expand(app);
        }
        KeyCode::Char(' ') => {
            app.toggle_under_cursor();
        }
        KeyCode::Char('a') => {
            begin_new_task(app);
        }
        KeyCode::Char('A') => {
            begin_new_subtask(app);
        }
        KeyCode::Char('e') => {
            begin_edit_under_cursor(app);
        }
        KeyCode::Char('d') => {
            delete_under_cursor(app);
        }
        KeyCode::Char('m') => {
            enter_move_mode(app);
        }
        KeyCode::Char('t') => {
            enter_theme_picker(app);
        }
        _ => {}
    }
}

/// Expand or collapse the subtask list of the task under the cursor
fn toggle_expand(app: &mut App) {
    if let Some(FlatItem::Task {
        id, has_subtasks, ..
    }) = app.cursor_item()
        && has_subtasks
        && !app.expanded.remove(&id)
    {
        app.expanded.insert(id);
    }
    app.clamp_cursor();
}

/// Delete whatever is under the cursor. Deleting a task takes its subtasks
/// with it; deleting a subtask leaves the parent's flag alone.
fn delete_under_cursor(app: &mut App) {
    let deleted = match app.cursor_item() {
        Some(FlatItem::Task { id, .. }) => task_ops::delete_task(&mut app.tasks, id).is_ok(),
        Some(FlatItem::Subtask {
            task_id,
            subtask_id,
            ..
        }) => task_ops::delete_subtask(&mut app.tasks, task_id, subtask_id).is_ok(),
        None => false,
    };
    if deleted {
        app.persist_tasks();
        app.clamp_cursor();
    }
}

/// Start typing a brand new task
fn begin_new_task(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = Some(EditTarget::NewTask);
    app.mode = Mode::Edit;
}

/// Start typing a new subtask under the cursor's task (works from the task
/// row or any of its subtask rows)
fn begin_new_subtask(app: &mut App) {
    let task_id = match app.cursor_item() {
        Some(FlatItem::Task { id, .. }) => id,
        Some(FlatItem::Subtask { task_id, .. }) => task_id,
        None => return,
    };
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = Some(EditTarget::NewSubtask(task_id));
    app.mode = Mode::Edit;
}

/// Enter edit mode for the item under the cursor, seeding the scratch
/// buffer with the current text
fn begin_edit_under_cursor(app: &mut App) {
    let (target, text) = match app.cursor_item() {
        Some(FlatItem::Task { index, id, .. }) => {
            (EditTarget::Task(id), app.tasks[index].text.clone())
        }
        Some(FlatItem::Subtask {
            task_index,
            sub_index,
            task_id,
            subtask_id,
            ..
        }) => (
            EditTarget::Subtask(task_id, subtask_id),
            app.tasks[task_index].subtasks[sub_index].text.clone(),
        ),
        None => return,
    };
    app.edit_cursor = text.len();
    app.edit_buffer = text;
    app.edit_target = Some(target);
    app.mode = Mode::Edit;
}
