use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, focused_border_style, hint_style, modal_title_style, placeholder_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the new-item input bar
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.ui_mode() == UiMode::Normal;

    let line = if app.ui.input.is_empty() {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.labels.input_placeholder, placeholder_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.ui.input.clone(), modal_title_style()),
            if focused {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ])
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { focused_border_style() } else { border_style() })
            .title(Span::styled(format!(" {} ", app.labels.add_hint), hint_style())),
    );

    f.render_widget(paragraph, area);
}
