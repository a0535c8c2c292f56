pub mod filter_bar;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod search_overlay;
pub mod stats_pane;
pub mod styles;

use crate::app::AppState;
use filter_bar::{render_dropdown, render_filter_bar};
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_alert_modal, render_status_line};
use ratatui::Frame;
use search_overlay::render_search_overlay;
use stats_pane::render_stats_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size, app.ui.narrow);

    // Render keybindings bar
    render_keybindings(f, app, layout.keybindings_area);

    // Render panes
    render_input_form(f, app, layout.input_area);
    render_filter_bar(f, app, layout.filter_area);
    render_list_pane(f, app, layout.list_area);
    render_stats_pane(f, app, layout.stats_area);
    render_status_line(f, app, layout.status_area);

    // Overlays, drawn over the panes
    render_dropdown(f, app, layout.filter_area);
    render_search_overlay(f, app, size);

    // Render alert last (takes precedence)
    render_alert_modal(f, app, size);
}
