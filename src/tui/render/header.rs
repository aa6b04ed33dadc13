use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::score::{productivity_score, remaining_count};
use crate::tui::app::App;

/// Render the header: title on the first row, remaining count and live
/// productivity score on the second.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let title = Line::from(vec![
        Span::styled(
            " My Tasks",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  \u{2014} {}", app.theme_id.display_name()),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);

    let remaining = remaining_count(&app.tasks);
    let score = productivity_score(&app.tasks);
    let stats = Line::from(vec![
        Span::styled(
            format!(" {} remaining", remaining),
            Style::default().fg(app.theme.text).bg(bg),
        ),
        Span::styled("  \u{00B7}  ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            format!("{}% done", score),
            Style::default().fg(app.theme.accent).bg(bg),
        ),
    ]);

    let paragraph = Paragraph::new(vec![title, stats]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
