use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen). A live celebration takes over
/// the whole row; otherwise it shows hints for the current mode.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(celebration) = &app.celebration {
        Line::from(Span::styled(
            format!(" \u{2728} {}", celebration.message),
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let hint = match app.mode {
            Mode::Navigate => {
                "space toggle  a add  A subtask  e edit  d delete  m move  t theme  ? help  q quit"
            }
            Mode::Edit => "Enter save  Esc cancel",
            Mode::Move => "j/k move  g/G top/bottom  Enter drop  Esc put back",
            Mode::Themes => "j/k choose  Enter apply  Esc close",
        };
        let mut spans = vec![Span::styled(
            format!(" {hint}"),
            Style::default().fg(app.theme.dim).bg(bg),
        )];
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(bg),
            ));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
