use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{App, FlatItem, Mode, MoveState};

/// Pick up the item under the cursor for reordering. The origin (task vs
/// subtask, index, parent) is recorded so a cancel can put it back.
pub(super) fn enter_move_mode(app: &mut App) {
    app.move_state = match app.cursor_item() {
        Some(FlatItem::Task { index, id, .. }) => Some(MoveState::Task {
            task_id: id,
            original_index: index,
        }),
        Some(FlatItem::Subtask {
            sub_index,
            task_id,
            subtask_id,
            ..
        }) => Some(MoveState::Subtask {
            task_id,
            subtask_id,
            original_index: sub_index,
        }),
        None => None,
    };
    if app.move_state.is_some() {
        app.mode = Mode::Move;
    }
}

pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        // Drop at the current position
        KeyCode::Enter | KeyCode::Char('m') => {
            app.move_state = None;
            app.mode = Mode::Navigate;
        }
        // Abandon: put the item back where it was picked up
        KeyCode::Esc => {
            restore_origin(app);
            app.move_state = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            shift(app, 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            shift(app, -1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            shift_to_boundary(app, true);
        }
        KeyCode::Char('G') | KeyCode::End => {
            shift_to_boundary(app, false);
        }
        _ => {}
    }
}

/// Current position of the picked item within its own sequence. A task
/// moves among tasks; a subtask moves among its parent's subtasks — there is
/// no way to cross into another sequence.
fn current_index(app: &App) -> Option<usize> {
    match app.move_state? {
        MoveState::Task { task_id, .. } => app.tasks.iter().position(|t| t.id == task_id),
        MoveState::Subtask {
            task_id,
            subtask_id,
            ..
        } => task_ops::find_task(&app.tasks, task_id)?
            .subtasks
            .iter()
            .position(|s| s.id == subtask_id),
    }
}

fn sequence_len(app: &App) -> usize {
    match app.move_state {
        Some(MoveState::Task { .. }) | None => app.tasks.len(),
        Some(MoveState::Subtask { task_id, .. }) => task_ops::find_task(&app.tasks, task_id)
            .map_or(0, |t| t.subtasks.len()),
    }
}

fn shift(app: &mut App, direction: i64) {
    let cur = match current_index(app) {
        Some(i) => i,
        None => return,
    };
    let len = sequence_len(app);
    if len == 0 {
        return;
    }
    let new = (cur as i64 + direction).clamp(0, len as i64 - 1) as usize;
    move_to(app, cur, new);
}

fn shift_to_boundary(app: &mut App, to_top: bool) {
    let cur = match current_index(app) {
        Some(i) => i,
        None => return,
    };
    let len = sequence_len(app);
    if len == 0 {
        return;
    }
    let new = if to_top { 0 } else { len - 1 };
    move_to(app, cur, new);
}

fn restore_origin(app: &mut App) {
    let original = match app.move_state {
        Some(MoveState::Task { original_index, .. })
        | Some(MoveState::Subtask { original_index, .. }) => original_index,
        None => return,
    };
    if let Some(cur) = current_index(app) {
        move_to(app, cur, original);
    }
}

/// Apply one reorder step within the origin sequence, keeping the cursor on
/// the moved item and mirroring to storage.
fn move_to(app: &mut App, from: usize, to: usize) {
    if from == to {
        return;
    }
    match app.move_state {
        Some(MoveState::Task { task_id, .. }) => {
            if task_ops::reorder_tasks(&mut app.tasks, from, to).is_ok() {
                app.persist_tasks();
                app.move_cursor_to_task(task_id);
            }
        }
        Some(MoveState::Subtask {
            task_id,
            subtask_id,
            ..
        }) => {
            if task_ops::reorder_subtasks(&mut app.tasks, task_id, from, to).is_ok() {
                app.persist_tasks();
                app.move_cursor_to_subtask(task_id, subtask_id);
            }
        }
        None => {}
    }
}
