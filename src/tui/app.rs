use std::collections::HashSet;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::storage::Storage;
use crate::io::store_io;
use crate::model::task::Task;
use crate::model::theme::ThemeId;
use crate::ops::{celebrate, task_ops};
use crate::ops::task_ops::IdGen;

use super::input;
use super::render;
use super::theme::Theme;

/// How long a celebration message stays on screen
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(2);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Move,
    Themes,
}

/// What the edit buffer will be committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Rewrite an existing task's text
    Task(u64),
    /// Rewrite an existing subtask's text (task id, subtask id)
    Subtask(u64, u64),
    /// Create a new task from the buffer
    NewTask,
    /// Create a new subtask under the given task
    NewSubtask(u64),
}

/// Drag origin while reordering. Movement is constrained to the origin
/// sequence, so a task can never drop into a subtask list and a subtask can
/// never leave its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveState {
    Task {
        task_id: u64,
        original_index: usize,
    },
    Subtask {
        task_id: u64,
        subtask_id: u64,
        original_index: usize,
    },
}

/// The single-slot celebration display
#[derive(Debug, Clone)]
pub struct Celebration {
    pub message: &'static str,
    pub shown_at: Instant,
}

/// A row in the flattened visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatItem {
    Task {
        index: usize,
        id: u64,
        has_subtasks: bool,
        is_expanded: bool,
    },
    Subtask {
        task_index: usize,
        sub_index: usize,
        task_id: u64,
        subtask_id: u64,
        is_last: bool,
    },
}

/// Main application state
pub struct App {
    // Persisted state
    pub tasks: Vec<Task>,
    pub theme_id: ThemeId,

    // Collaborators
    pub storage: Box<dyn Storage>,
    pub ids: IdGen,
    pub rng: StdRng,

    // Transient UI state — never persisted, fresh on every run
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub expanded: HashSet<u64>,
    pub show_help: bool,
    pub edit_buffer: String,
    pub edit_cursor: usize,
    pub edit_target: Option<EditTarget>,
    pub move_state: Option<MoveState>,
    pub celebration: Option<Celebration>,
    pub theme_cursor: usize,
}

impl App {
    /// Load persisted state from storage and build a fresh UI.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        App::with_rng(storage, StdRng::from_entropy())
    }

    /// Like `new`, but with an injected RNG so tests control celebration
    /// message choice.
    pub fn with_rng(storage: Box<dyn Storage>, rng: StdRng) -> Self {
        let tasks = store_io::load_tasks(storage.as_ref());
        let theme_id = store_io::load_theme(storage.as_ref());
        let ids = IdGen::seeded_from(&tasks);
        let theme = Theme::for_id(theme_id);
        let theme_cursor = ThemeId::ALL.iter().position(|t| *t == theme_id).unwrap_or(0);

        App {
            tasks,
            theme_id,
            storage,
            ids,
            rng,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            expanded: HashSet::new(),
            show_help: false,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            move_state: None,
            celebration: None,
            theme_cursor,
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Mirror the task list to storage. Called after every mutation; a
    /// failed write is not fatal to the session.
    pub fn persist_tasks(&mut self) {
        let _ = store_io::save_tasks(self.storage.as_mut(), &self.tasks);
    }

    /// Switch themes and persist the selection immediately.
    pub fn set_theme(&mut self, id: ThemeId) {
        self.theme_id = id;
        self.theme = Theme::for_id(id);
        let _ = store_io::save_theme(self.storage.as_mut(), id);
    }

    // -----------------------------------------------------------------------
    // Visible rows
    // -----------------------------------------------------------------------

    /// Build the flat list of visible rows: each task, followed by its
    /// subtasks when expanded.
    pub fn flat_items(&self) -> Vec<FlatItem> {
        let mut items = Vec::new();
        for (index, task) in self.tasks.iter().enumerate() {
            let has_subtasks = task.has_subtasks();
            let is_expanded = has_subtasks && self.expanded.contains(&task.id);
            items.push(FlatItem::Task {
                index,
                id: task.id,
                has_subtasks,
                is_expanded,
            });
            if is_expanded {
                let count = task.subtasks.len();
                for (sub_index, subtask) in task.subtasks.iter().enumerate() {
                    items.push(FlatItem::Subtask {
                        task_index: index,
                        sub_index,
                        task_id: task.id,
                        subtask_id: subtask.id,
                        is_last: sub_index + 1 == count,
                    });
                }
            }
        }
        items
    }

    /// The row under the cursor, if any
    pub fn cursor_item(&self) -> Option<FlatItem> {
        self.flat_items().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible list after mutations
    pub fn clamp_cursor(&mut self) {
        let len = self.flat_items().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Point the cursor at a specific task row
    pub fn move_cursor_to_task(&mut self, task_id: u64) {
        if let Some(pos) = self
            .flat_items()
            .iter()
            .position(|item| matches!(item, FlatItem::Task { id, .. } if *id == task_id))
        {
            self.cursor = pos;
        }
    }

    /// Point the cursor at a specific subtask row
    pub fn move_cursor_to_subtask(&mut self, task_id: u64, subtask_id: u64) {
        if let Some(pos) = self.flat_items().iter().position(|item| {
            matches!(item, FlatItem::Subtask { task_id: t, subtask_id: s, .. }
                if *t == task_id && *s == subtask_id)
        }) {
            self.cursor = pos;
        }
    }

    // -----------------------------------------------------------------------
    // Celebration feed
    // -----------------------------------------------------------------------

    /// Show a fresh celebration. Replaces the previous one and restarts the
    /// two-second clear timer.
    pub fn celebrate(&mut self) {
        self.celebration = Some(Celebration {
            message: celebrate::pick_message(&mut self.rng),
            shown_at: Instant::now(),
        });
    }

    /// Expire the celebration once its display window has passed. Driven by
    /// the event loop tick.
    pub fn tick(&mut self) {
        let expired = self
            .celebration
            .as_ref()
            .is_some_and(|c| c.shown_at.elapsed() >= CELEBRATION_DURATION);
        if expired {
            self.celebration = None;
        }
    }

    // -----------------------------------------------------------------------
    // Toggle under cursor (used by navigate mode)
    // -----------------------------------------------------------------------

    /// Toggle the item under the cursor. Fires a celebration exactly when
    /// the toggle lands on the completed state.
    pub fn toggle_under_cursor(&mut self) {
        let completed = match self.cursor_item() {
            Some(FlatItem::Task { id, .. }) => task_ops::toggle_task(&mut self.tasks, id).ok(),
            Some(FlatItem::Subtask {
                task_id,
                subtask_id,
                ..
            }) => task_ops::toggle_subtask(&mut self.tasks, task_id, subtask_id).ok(),
            None => None,
        };
        if let Some(completed) = completed {
            self.persist_tasks();
            if completed {
                self.celebrate();
            }
        }
    }
}

/// Run the TUI application against the given storage.
pub fn run(storage: Box<dyn Storage>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(storage);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemStorage;
    use pretty_assertions::assert_eq;

    fn test_app() -> App {
        App::with_rng(Box::new(MemStorage::new()), StdRng::seed_from_u64(1))
    }

    fn add(app: &mut App, text: &str) -> u64 {
        let id = task_ops::add_task(&mut app.tasks, &mut app.ids, text).unwrap();
        app.persist_tasks();
        id
    }

    #[test]
    fn fresh_app_starts_empty_with_default_theme() {
        let app = test_app();
        assert!(app.tasks.is_empty());
        assert_eq!(app.theme_id, ThemeId::Blue);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.celebration.is_none());
    }

    #[test]
    fn flat_items_hide_collapsed_subtasks() {
        let mut app = test_app();
        let tid = add(&mut app, "parent");
        task_ops::add_subtask(&mut app.tasks, &mut app.ids, tid, "child").unwrap();

        assert_eq!(app.flat_items().len(), 1);
        app.expanded.insert(tid);
        assert_eq!(app.flat_items().len(), 2);
        assert!(matches!(
            app.flat_items()[1],
            FlatItem::Subtask { is_last: true, .. }
        ));
    }

    #[test]
    fn toggle_under_cursor_fires_celebration_on_completion_only() {
        let mut app = test_app();
        add(&mut app, "t");

        app.toggle_under_cursor();
        assert!(app.tasks[0].completed);
        assert!(app.celebration.is_some());

        app.celebration = None;
        app.toggle_under_cursor();
        assert!(!app.tasks[0].completed);
        assert!(app.celebration.is_none(), "un-completing never celebrates");
    }

    #[test]
    fn celebration_is_single_slot_and_expires() {
        let mut app = test_app();
        app.celebrate();
        let first = app.celebration.clone().unwrap();
        app.celebrate();
        let second = app.celebration.clone().unwrap();
        assert!(second.shown_at >= first.shown_at);

        // Not yet expired
        app.tick();
        assert!(app.celebration.is_some());

        // Simulate the timer having elapsed
        app.celebration = Some(Celebration {
            message: first.message,
            shown_at: Instant::now() - CELEBRATION_DURATION,
        });
        app.tick();
        assert!(app.celebration.is_none());
    }

    #[test]
    fn clamp_cursor_after_delete() {
        let mut app = test_app();
        let tid = add(&mut app, "only");
        app.cursor = 0;
        task_ops::delete_task(&mut app.tasks, tid).unwrap();
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert!(app.cursor_item().is_none());
    }

    #[test]
    fn set_theme_persists_immediately() {
        let mut app = test_app();
        app.set_theme(ThemeId::Dark);
        assert_eq!(store_io::load_theme(app.storage.as_ref()), ThemeId::Dark);
    }

    #[test]
    fn mutations_reach_storage() {
        let mut app = test_app();
        add(&mut app, "Buy milk");
        let loaded = store_io::load_tasks(app.storage.as_ref());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "Buy milk");
        assert!(!loaded[0].completed);
    }
}
