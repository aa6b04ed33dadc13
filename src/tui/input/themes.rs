use crossterm::event::{KeyCode, KeyEvent};

use crate::model::theme::ThemeId;
use crate::tui::app::{App, Mode};

/// Open the theme picker with the current theme selected
pub(super) fn enter_theme_picker(app: &mut App) {
    app.theme_cursor = ThemeId::ALL
        .iter()
        .position(|t| *t == app.theme_id)
        .unwrap_or(0);
    app.mode = Mode::Themes;
}

pub(super) fn handle_themes(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('t') | KeyCode::Char('q') => {
            app.mode = Mode::Navigate;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.theme_cursor + 1 < ThemeId::ALL.len() {
                app.theme_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_cursor = app.theme_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let id = ThemeId::ALL[app.theme_cursor];
            app.set_theme(id);
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
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

    #[test]
    fn picker_selects_and_persists_theme() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.mode, Mode::Themes);
        assert_eq!(app.theme_cursor, 0, "opens on the current theme");

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.theme_id, ThemeId::Black);
        assert_eq!(store_io::load_theme(app.storage.as_ref()), ThemeId::Black);
    }

    #[test]
    fn esc_keeps_the_old_theme() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.theme_id, ThemeId::Blue);
    }

    #[test]
    fn picker_cursor_clamps() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.theme_cursor, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.theme_cursor, ThemeId::ALL.len() - 1);
        press(&mut app, KeyCode::Esc);
    }
}
