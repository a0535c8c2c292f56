use crate::app::AppState;
use crate::domain::{checkbox, SearchResult};
use crate::listeners::OutsideTarget;
use crate::ui::{
    layout::create_modal_area,
    list_pane::create_edit_line,
    styles::{default_style, done_style, modal_bg_style, modal_title_style, placeholder_style, selected_style},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render the search overlay and record its area
pub fn render_search_overlay(f: &mut Frame, app: &mut AppState, area: Rect) {
    if !app.ui.search_open {
        return;
    }

    let overlay = create_modal_area(area, 14);
    app.listeners.set_area(OutsideTarget::SearchOverlay, overlay);

    // Clear the area behind the overlay
    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(app.labels.search_title, modal_title_style()))
        .style(modal_bg_style());
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let query_line = if app.ui.search.is_empty() {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.labels.search_placeholder, placeholder_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.ui.search.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()),
        ])
    };
    f.render_widget(Paragraph::new(query_line), chunks[0]);

    let editing = app.list.editing_id();
    let draft = app.list.draft().unwrap_or_default().to_string();
    let results_area = chunks[1];
    let mut edit_field = None;

    let message = match app.search_results() {
        SearchResult::NoQuery => Some(app.labels.search_no_query),
        SearchResult::Matches(matches) if matches.is_empty() => Some(app.labels.search_no_matches),
        SearchResult::Matches(matches) => {
            let rows: Vec<ListItem> = matches
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    if Some(item.id) == editing {
                        return ListItem::new(create_edit_line(item, &draft));
                    }
                    let style = if idx == app.ui.selected {
                        selected_style()
                    } else if item.completed {
                        done_style()
                    } else {
                        default_style()
                    };
                    ListItem::new(Line::raw(format!("{} {}", checkbox(item.completed), item.text))).style(style)
                })
                .collect();

            if let Some(row) = editing.and_then(|id| matches.iter().position(|i| i.id == id)) {
                edit_field = result_row_area(results_area, row);
            }
            f.render_widget(List::new(rows), results_area);
            None
        }
    };

    // The overlay covers the main list, so the edit field lives here while it's open
    if editing.is_some() {
        match edit_field {
            Some(field) => app.listeners.set_area(OutsideTarget::EditField, field),
            None => app.listeners.mark_offscreen(OutsideTarget::EditField),
        }
    }

    if let Some(message) = message {
        f.render_widget(
            Paragraph::new(Span::styled(message, placeholder_style())),
            results_area,
        );
    }
}

/// Screen row of match `index`, if it fits in the results area
fn result_row_area(area: Rect, index: usize) -> Option<Rect> {
    let offset = u16::try_from(index).ok()?;
    if offset >= area.height {
        return None;
    }
    Some(Rect::new(area.x, area.y + offset, area.width, 1))
}
