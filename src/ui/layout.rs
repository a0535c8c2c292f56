use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub input_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub stats_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - New-item input (bordered)
/// - Filter tabs, or the dropdown button when narrow (1 row)
/// - Item list (rest)
/// - Stats: progress, gauge, collapse toggle
/// - Status line (1 row)
pub fn create_layout(area: Rect, narrow: bool) -> MainLayout {
    // The collapse toggle row only exists on narrow layouts
    let stats_height = if narrow { 3 } else { 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Keybindings bar
            Constraint::Length(3),            // Input
            Constraint::Length(1),            // Filter
            Constraint::Min(3),               // List
            Constraint::Length(stats_height), // Stats
            Constraint::Length(1),            // Status line
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        input_area: chunks[1],
        filter_area: chunks[2],
        list_area: chunks[3],
        stats_area: chunks[4],
        status_area: chunks[5],
    }
}

/// Create a centered modal area of the given height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Popup holding the dropdown options, just under the filter button
pub fn create_dropdown_area(filter_area: Rect, bounds: Rect, options: u16, width: u16) -> Rect {
    let x = filter_area.x;
    let y = filter_area.y.saturating_add(1);
    let width = width.min(bounds.right().saturating_sub(x));
    let height = (options + 2).min(bounds.bottom().saturating_sub(y));
    Rect::new(x, y, width, height)
}
