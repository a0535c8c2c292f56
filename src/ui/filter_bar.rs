use crate::app::AppState;
use crate::domain::{Counts, Filter};
use crate::labels::Labels;
use crate::listeners::OutsideTarget;
use crate::ui::{
    layout::create_dropdown_area,
    styles::{active_tab_style, default_style, hint_style, modal_bg_style, selected_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const DROPDOWN_WIDTH: u16 = 24;

/// Render the filter control: tabs when wide, a dropdown button when narrow
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let counts = app.counts();
    let line = if app.ui.narrow {
        dropdown_button_line(app.labels, app.ui.filter, &counts, app.ui.dropdown_open)
    } else {
        tabs_line(app.labels, app.ui.filter, &counts)
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Render the open dropdown's options over the list, recording its area
pub fn render_dropdown(f: &mut Frame, app: &mut AppState, filter_area: Rect) {
    if !app.ui.dropdown_open {
        return;
    }

    let bounds = f.size();
    let options = Filter::all();
    let popup = create_dropdown_area(filter_area, bounds, options.len() as u16, DROPDOWN_WIDTH);
    app.listeners.set_area(OutsideTarget::FilterDropdown, popup);

    let counts = app.counts();
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(idx, filter)| {
            let style = if idx == app.ui.dropdown_cursor {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(Line::raw(app.labels.filter_with_count(*filter, &counts))).style(style)
        })
        .collect();

    f.render_widget(Clear, popup);
    let list = List::new(items).block(Block::default().borders(Borders::ALL).style(modal_bg_style()));
    f.render_widget(list, popup);
}

/// " すべて (5)  未完了 (3)  完了済み (2)  F1/F3/F4"
fn tabs_line(labels: &Labels, active: Filter, counts: &Counts) -> Line<'static> {
    let mut spans = Vec::new();
    for filter in Filter::all() {
        spans.push(Span::raw(" "));
        let label = format!(" {} ", labels.filter_with_count(*filter, counts));
        if *filter == active {
            spans.push(Span::styled(label, active_tab_style()));
        } else {
            spans.push(Span::styled(label, default_style()));
        }
    }
    spans.push(Span::styled("  F1/F3/F4", hint_style()));
    Line::from(spans)
}

/// " すべて (5) ▼"
fn dropdown_button_line(labels: &Labels, active: Filter, counts: &Counts, open: bool) -> Line<'static> {
    let arrow = if open { "▲" } else { "▼" };
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!(" {} {} ", labels.filter_with_count(active, counts), arrow), active_tab_style()),
        Span::styled("  Ctrl+F", hint_style()),
    ])
}
