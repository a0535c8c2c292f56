use crate::app::AppState;
use crate::domain::{Filter, UiMode};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// Handle one terminal event; returns true when the app should quit
pub fn handle_event(app: &mut AppState, event: Event) -> Result<bool> {
    match event {
        // Only process key press events (ignore key release)
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                app.on_mouse_down(mouse.column, mouse.row);
            }
            Ok(false)
        }
        Event::Resize(columns, _rows) => {
            app.on_resize(columns);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Quit works everywhere except while an alert is up
    if app.ui_mode() != UiMode::Alert
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return Ok(true);
    }

    match app.ui_mode() {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Editing => handle_editing_mode(app, key),
        UiMode::FilterDropdown => handle_dropdown_mode(app, key),
        UiMode::Search => handle_search_mode(app, key),
        UiMode::Alert => {
            app.dismiss_alert();
            Ok(false)
        }
    }
}

/// Shortcuts shared by the main list and the search overlay
fn handle_list_shortcut(app: &mut AppState, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Tab => app.toggle_selected(),
        KeyCode::F(2) => app.start_edit_selected(),
        KeyCode::Char('e') if ctrl => app.start_edit_selected(),
        KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('d') if ctrl => app.delete_selected(),
        KeyCode::Char('s') if ctrl => app.toggle_search(),
        _ => return false,
    }
    true
}

/// Handle keys in normal mode: typing goes to the new-item input
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_list_shortcut(app, key) {
        return Ok(false);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => app.input_pop(),
        KeyCode::Esc => app.input_clear(),

        // Bulk delete is only offered when something is completed
        KeyCode::Char('x') if ctrl => {
            if app.counts().has_completed() {
                app.delete_completed();
            }
        }

        // Filter control
        KeyCode::Char('f') if ctrl => app.cycle_filter(),
        KeyCode::F(1) if !app.ui.narrow => app.set_filter(Filter::All),
        KeyCode::F(3) if !app.ui.narrow => app.set_filter(Filter::Pending),
        KeyCode::F(4) if !app.ui.narrow => app.set_filter(Filter::Done),

        KeyCode::Char('k') if ctrl => app.toggle_collapse(),

        // Add character (without Ctrl modifier so shortcuts don't leak into the input)
        KeyCode::Char(c) if !ctrl => app.input_push(c),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while an item is edited inline
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.save_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.edit_pop(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.edit_push(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while the filter dropdown is open
fn handle_dropdown_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up => app.dropdown_up(),
        KeyCode::Down => app.dropdown_down(),
        KeyCode::Enter => app.dropdown_select(),
        KeyCode::Esc => app.close_dropdown(),
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => app.close_dropdown(),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while the search overlay is focused
fn handle_search_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_list_shortcut(app, key) {
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc => app.close_search(),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.search_push(c),
        _ => {}
    }
    Ok(false)
}
