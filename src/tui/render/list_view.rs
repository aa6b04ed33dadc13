use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, FlatItem, Mode};
use crate::util::unicode;

/// Render the task list: one row per visible flat item, plus a synthetic
/// input row while a new task/subtask is being typed.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let items = app.flat_items();

    if items.is_empty() && app.edit_target.is_none() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No tasks yet. Press 'a' to add one.",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_row = 0usize;

    // Synthetic input row for a task being typed (newest-first: at the top)
    if app.mode == Mode::Edit && app.edit_target == Some(EditTarget::NewTask) {
        lines.push(input_row(app, 0));
        cursor_row = 0;
    }

    for (i, item) in items.iter().enumerate() {
        let selected = app.mode != Mode::Edit && i == app.cursor;
        if selected {
            cursor_row = lines.len();
        }
        lines.push(item_row(app, item, selected, area.width as usize));

        // Synthetic input row for a subtask being typed, right below its
        // parent's last visible row
        if app.mode == Mode::Edit
            && let Some(EditTarget::NewSubtask(parent_id)) = app.edit_target
            && row_closes_parent(&items, i, parent_id)
        {
            cursor_row = lines.len();
            lines.push(input_row(app, 1));
        }

        // An existing row mid-edit is the cursor row
        if app.mode == Mode::Edit && item_is_edit_target(item, app.edit_target) {
            cursor_row = lines.len() - 1;
        }
    }

    // Keep the cursor row on screen
    let height = area.height as usize;
    if height > 0 {
        if cursor_row < app.scroll_offset {
            app.scroll_offset = cursor_row;
        } else if cursor_row >= app.scroll_offset + height {
            app.scroll_offset = cursor_row + 1 - height;
        }
    }
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(height)
        .collect();

    let paragraph = Paragraph::new(visible).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// True when row `i` is the last visible row belonging to `parent_id`
/// (the parent row itself when collapsed or childless)
fn row_closes_parent(items: &[FlatItem], i: usize, parent_id: u64) -> bool {
    let belongs = |item: &FlatItem| match item {
        FlatItem::Task { id, .. } => *id == parent_id,
        FlatItem::Subtask { task_id, .. } => *task_id == parent_id,
    };
    belongs(&items[i]) && items.get(i + 1).is_none_or(|next| !belongs(next))
}

fn item_is_edit_target(item: &FlatItem, target: Option<EditTarget>) -> bool {
    match (item, target) {
        (FlatItem::Task { id, .. }, Some(EditTarget::Task(tid))) => *id == tid,
        (
            FlatItem::Subtask {
                task_id,
                subtask_id,
                ..
            },
            Some(EditTarget::Subtask(tid, sid)),
        ) => *task_id == tid && *subtask_id == sid,
        _ => false,
    }
}

/// One rendered row for a flat item
fn item_row<'a>(app: &App, item: &FlatItem, selected: bool, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };

    let held = match (app.move_state, item) {
        (Some(crate::tui::app::MoveState::Task { task_id, .. }), FlatItem::Task { id, .. }) => {
            task_id == *id
        }
        (
            Some(crate::tui::app::MoveState::Subtask { subtask_id, .. }),
            FlatItem::Subtask {
                subtask_id: sid, ..
            },
        ) => subtask_id == *sid,
        _ => false,
    };

    let (prefix, checkbox, text, completed) = match *item {
        FlatItem::Task {
            index,
            has_subtasks,
            is_expanded,
            ..
        } => {
            let task = &app.tasks[index];
            let marker = if !has_subtasks {
                "  "
            } else if is_expanded {
                "\u{25BE} " // ▾
            } else {
                "\u{25B8} " // ▸
            };
            let checkbox = if task.completed { "[x] " } else { "[ ] " };
            (marker, checkbox, task.text.clone(), task.completed)
        }
        FlatItem::Subtask {
            task_index,
            sub_index,
            is_last,
            ..
        } => {
            let subtask = &app.tasks[task_index].subtasks[sub_index];
            let branch = if is_last {
                "   \u{2514}\u{2500} " // └─
            } else {
                "   \u{251C}\u{2500} " // ├─
            };
            let checkbox = if subtask.completed { "[x] " } else { "[ ] " };
            (branch, checkbox, subtask.text.clone(), subtask.completed)
        }
    };

    // Mid-edit rows show the scratch buffer instead of the stored text
    if app.mode == Mode::Edit && item_is_edit_target(item, app.edit_target) {
        let mut spans = vec![
            Span::styled(format!(" {prefix}"), Style::default().fg(theme.dim).bg(bg)),
            Span::styled(checkbox.to_string(), Style::default().fg(theme.dim).bg(bg)),
        ];
        spans.extend(edit_buffer_spans(app, bg));
        return Line::from(spans);
    }

    let text_style = if held {
        Style::default()
            .fg(theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else if completed {
        Style::default()
            .fg(theme.done)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if selected {
        Style::default().fg(theme.selection_fg).bg(bg)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };

    let checkbox_style = if completed {
        Style::default().fg(theme.accent).bg(bg)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };

    // Fit the text to the pane, ellipsized
    let lead_cells = 1 + unicode::display_width(prefix) + checkbox.len();
    let text = unicode::truncate_to_width(&text, width.saturating_sub(lead_cells));

    Line::from(vec![
        Span::styled(format!(" {prefix}"), Style::default().fg(theme.dim).bg(bg)),
        Span::styled(checkbox.to_string(), checkbox_style),
        Span::styled(text, text_style),
    ])
}

/// Synthetic row showing the edit buffer for a not-yet-created item
fn input_row<'a>(app: &App, indent: usize) -> Line<'a> {
    let bg = app.theme.selection_bg;
    let lead = if indent == 0 {
        "   [ ] ".to_string()
    } else {
        "    \u{2514}\u{2500} [ ] ".to_string()
    };
    let mut spans = vec![Span::styled(
        lead,
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    spans.extend(edit_buffer_spans(app, bg));
    Line::from(spans)
}

/// The scratch buffer split around a block cursor
fn edit_buffer_spans<'a>(app: &App, bg: ratatui::style::Color) -> Vec<Span<'a>> {
    let before = app.edit_buffer[..app.edit_cursor].to_string();
    let after = app.edit_buffer[app.edit_cursor..].to_string();
    vec![
        Span::styled(
            before,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.accent).bg(bg),
        ),
        Span::styled(after, Style::default().fg(app.theme.text_bright).bg(bg)),
    ]
}
