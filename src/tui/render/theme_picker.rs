use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::model::theme::ThemeId;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render the theme picker popup: one row per theme, a swatch of the
/// theme's own accent next to its name.
pub fn render_theme_picker(frame: &mut Frame, app: &App, area: Rect) {
    let popup = super::centered_rect(area, 30, (ThemeId::ALL.len() + 2) as u16);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Choose Theme ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(
            Style::default()
                .fg(app.theme.popup_border)
                .bg(app.theme.popup_bg),
        )
        .style(Style::default().bg(app.theme.popup_bg));

    let mut lines = Vec::new();
    for (i, id) in ThemeId::ALL.iter().enumerate() {
        let selected = i == app.theme_cursor;
        let current = *id == app.theme_id;
        let swatch_color = Theme::for_id(*id).accent;

        let marker = if current { "\u{25CF} " } else { "  " }; // ●
        let name_style = if selected {
            Style::default()
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(app.theme.popup_bg)
        };
        let row_bg = if selected {
            app.theme.selection_bg
        } else {
            app.theme.popup_bg
        };

        lines.push(Line::from(vec![
            Span::styled(" \u{25A0} ", Style::default().fg(swatch_color).bg(row_bg)), // ■
            Span::styled(format!("{:<18}", id.display_name()), name_style),
            Span::styled(marker.to_string(), Style::default().fg(app.theme.accent).bg(row_bg)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
