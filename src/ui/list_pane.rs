use crate::app::AppState;
use crate::domain::{checkbox, Item, UiMode};
use crate::listeners::OutsideTarget;
use crate::ui::styles::{
    border_style, default_style, done_style, edit_style, focused_border_style, placeholder_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the item list under the active filter
pub fn render_list_pane(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.list_area = Some(area);

    let editing = app.list.editing_id();
    let draft = app.list.draft().unwrap_or_default().to_string();
    let focused = matches!(app.ui_mode(), UiMode::Normal | UiMode::Editing);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { focused_border_style() } else { border_style() })
        .title(Span::styled(app.labels.title, title_style()));

    let items = app.displayed_items();
    if items.is_empty() {
        let message = app.labels.empty_message(app.ui.filter);
        let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {message}"), placeholder_style())))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let edit_row = editing.and_then(|id| items.iter().position(|i| i.id == id));
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let line = if Some(item.id) == editing {
                create_edit_line(item, &draft)
            } else {
                create_item_line(item)
            };
            ListItem::new(line)
        })
        .collect();
    let row_count = rows.len();

    // The search overlay has its own selection
    if app.ui.search_open {
        app.list_state.select(None);
    } else {
        app.list_state.select(Some(app.ui.selected.min(row_count - 1)));
    }

    let list = List::new(rows).block(block).highlight_style(selected_style());
    f.render_stateful_widget(list, area, &mut app.list_state);

    if let Some(row) = edit_row {
        match row_area(area, app.list_state.offset(), row) {
            Some(field) => app.listeners.set_area(OutsideTarget::EditField, field),
            None => app.listeners.mark_offscreen(OutsideTarget::EditField),
        }
    }
}

/// Screen row of list entry `index`, if it is scrolled into view
fn row_area(area: Rect, offset: usize, index: usize) -> Option<Rect> {
    let inner_height = usize::from(area.height.saturating_sub(2));
    if index < offset || index - offset >= inner_height {
        return None;
    }
    let y = area.y + 1 + u16::try_from(index - offset).ok()?;
    Some(Rect::new(area.x + 1, y, area.width.saturating_sub(2), 1))
}

/// "[x] Walk dog"
fn create_item_line(item: &Item) -> Line<'static> {
    let text_style = if item.completed { done_style() } else { default_style() };
    Line::from(vec![
        Span::raw(format!("{} ", checkbox(item.completed))),
        Span::styled(item.text.clone(), text_style),
    ])
}

/// Row being edited: the draft with a cursor
pub fn create_edit_line(item: &Item, draft: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", checkbox(item.completed))),
        Span::styled(draft.to_string(), edit_style()),
        Span::styled("█", edit_style()),
    ])
}
