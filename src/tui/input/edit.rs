use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_ops;
use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            commit_edit(app);
        }
        (_, KeyCode::Esc) => {
            cancel_edit(app);
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
            }
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        (_, KeyCode::Home) => {
            app.edit_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Commit the scratch buffer. A blank buffer discards the edit (existing
/// text reverts, pending new items are never created) but still leaves edit
/// mode.
fn commit_edit(app: &mut App) {
    let target = match app.edit_target.take() {
        Some(t) => t,
        None => {
            app.mode = Mode::Navigate;
            return;
        }
    };
    let text = app.edit_buffer.clone();

    let changed = match target {
        EditTarget::Task(id) => task_ops::edit_task_text(&mut app.tasks, id, &text).is_ok(),
        EditTarget::Subtask(task_id, subtask_id) => {
            task_ops::edit_subtask_text(&mut app.tasks, task_id, subtask_id, &text).is_ok()
        }
        EditTarget::NewTask => match task_ops::add_task(&mut app.tasks, &mut app.ids, &text) {
            Ok(id) => {
                app.move_cursor_to_task(id);
                true
            }
            Err(_) => false,
        },
        EditTarget::NewSubtask(task_id) => {
            match task_ops::add_subtask(&mut app.tasks, &mut app.ids, task_id, &text) {
                Ok(sub_id) => {
                    // Make sure the new row is visible and selected
                    app.expanded.insert(task_id);
                    app.move_cursor_to_subtask(task_id, sub_id);
                    true
                }
                Err(_) => false,
            }
        }
    };

    if changed {
        app.persist_tasks();
    }
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.mode = Mode::Navigate;
    app.clamp_cursor();
}

/// Abandon the edit: the scratch buffer is thrown away
fn cancel_edit(app: &mut App) {
    app.edit_target = None;
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.mode = Mode::Navigate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemStorage;
    use crate::io::store_io;
    use crossterm::event::KeyEvent;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_app() -> App {
        App::with_rng(Box::new(MemStorage::new()), StdRng::seed_from_u64(1))
    }

    fn press(app: &mut App, code: KeyCode) {
        super::super::handle_key(app, KeyEvent::from(code));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn new_task_commit_creates_and_persists() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "Buy milk");
        assert_eq!(app.cursor, 0);
        assert_eq!(store_io::load_tasks(app.storage.as_ref()).len(), 1);
    }

    #[test]
    fn blank_commit_discards_but_exits_edit_mode() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn blank_commit_on_existing_task_reverts_text() {
        let mut app = test_app();
        task_ops::add_task(&mut app.tasks, &mut app.ids, "keep me").unwrap();

        press(&mut app, KeyCode::Char('e'));
        // Wipe the buffer
        for _ in 0.."keep me".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks[0].text, "keep me");
    }

    #[test]
    fn esc_cancels_without_applying() {
        let mut app = test_app();
        task_ops::add_task(&mut app.tasks, &mut app.ids, "original").unwrap();

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, " changed");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.tasks[0].text, "original");
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit_target.is_none());
    }

    #[test]
    fn new_subtask_commit_expands_parent_and_selects_row() {
        let mut app = test_app();
        let tid = task_ops::add_task(&mut app.tasks, &mut app.ids, "parent").unwrap();

        press(&mut app, KeyCode::Char('A'));
        type_text(&mut app, "child");
        press(&mut app, KeyCode::Enter);

        assert!(app.expanded.contains(&tid));
        assert_eq!(app.tasks[0].subtasks.len(), 1);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn editing_does_not_touch_completion() {
        let mut app = test_app();
        let tid = task_ops::add_task(&mut app.tasks, &mut app.ids, "t").unwrap();
        task_ops::toggle_task(&mut app.tasks, tid).unwrap();

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "!");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tasks[0].text, "t!");
        assert!(app.tasks[0].completed);
        assert!(app.celebration.is_none(), "edits never celebrate");
    }

    #[test]
    fn cursor_moves_are_grapheme_aware() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "ab");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('X'));
        assert_eq!(app.edit_buffer, "aXb");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.edit_buffer, "aX");
        press(&mut app, KeyCode::Esc);
    }
}
