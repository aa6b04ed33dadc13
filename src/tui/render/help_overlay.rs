use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k, arrows", "move cursor"),
    ("g / G", "jump to top / bottom"),
    ("space", "toggle completion"),
    ("Tab, Enter", "expand / collapse subtasks"),
    ("a", "add a task"),
    ("A", "add a subtask"),
    ("e", "edit text in place"),
    ("d", "delete item under cursor"),
    ("m", "pick up and reorder"),
    ("t", "theme picker"),
    ("q", "quit"),
];

/// Render the help overlay listing all key bindings
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = (BINDINGS.len() + 2) as u16;
    let popup = super::centered_rect(area, 44, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(
            Style::default()
                .fg(app.theme.popup_border)
                .bg(app.theme.popup_bg),
        )
        .style(Style::default().bg(app.theme.popup_bg));

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", keys),
                    Style::default()
                        .fg(app.theme.accent)
                        .bg(app.theme.popup_bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    (*what).to_string(),
                    Style::default().fg(app.theme.text).bg(app.theme.popup_bg),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
