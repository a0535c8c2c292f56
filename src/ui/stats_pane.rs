use crate::app::AppState;
use crate::ui::styles::{default_style, gauge_style, hint_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Progress text, gauge, and the collapse toggle row
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let counts = app.counts();
    let labels = app.labels;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let mut spans = vec![Span::styled(format!(" {}", labels.progress(&counts)), default_style())];
    if counts.has_completed() {
        spans.push(Span::styled(format!("   Ctrl+X {}", labels.delete_completed), hint_style()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let ratio = counts.progress_ratio();
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    f.render_widget(gauge, rows[1]);

    if app.collapse_toggle_visible() && rows[2].height > 0 {
        let toggle = Line::from(vec![
            Span::styled(" Ctrl+K ", hint_style()),
            Span::styled(labels.collapse_toggle(app.ui.collapse_completed), default_style()),
        ]);
        f.render_widget(Paragraph::new(toggle), rows[2]);
    }
}
