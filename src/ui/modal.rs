use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the blocking alert (duplicate names)
pub fn render_alert_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = &app.ui.alert {
        let modal_area = create_modal_area(area, 7);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(format!("  {message}"), modal_title_style())),
            Line::raw(""),
            Line::from(Span::styled(format!("  {}", app.labels.dismiss_hint), hint_style())),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(app.labels.alert_title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the status line (failed saves)
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(status) = &app.ui.status {
        let paragraph = Paragraph::new(Span::styled(format!(" {status}"), error_style()));
        f.render_widget(paragraph, area);
    }
}
