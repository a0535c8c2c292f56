use crate::domain::{Counts, Filter, Item, ItemId, SearchResult, UiMode};
use crate::labels::Labels;
use crate::list::{EditOutcome, ListError, TodoList};
use crate::listeners::{OutsideClickListeners, OutsideTarget, Subscription};
use crate::persistence::{AppConfig, Storage};
use crate::viewport::Viewport;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tracing::{debug, error, info};

/// Ephemeral UI state (never persisted)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub filter: Filter,
    /// New-item input buffer
    pub input: String,
    pub search: String,
    pub narrow: bool,
    pub dropdown_open: bool,
    /// Highlighted option while the dropdown is open
    pub dropdown_cursor: usize,
    pub search_open: bool,
    pub collapse_completed: bool,
    /// Index into the rows currently shown (list or search matches)
    pub selected: usize,
    /// Blocking message (duplicate names)
    pub alert: Option<String>,
    /// Non-blocking status line (failed saves)
    pub status: Option<String>,
}

/// Main application state
pub struct AppState {
    pub list: TodoList,
    pub ui: UiState,
    pub labels: &'static Labels,
    pub viewport: Viewport,
    pub listeners: OutsideClickListeners,
    /// Scroll state of the main list, kept between frames
    pub list_state: ListState,
    /// Where the main list was last drawn (for mouse hits)
    pub list_area: Option<Rect>,
    store: Box<dyn Storage>,
    edit_subscription: Option<Subscription>,
    dropdown_subscription: Option<Subscription>,
    search_subscription: Option<Subscription>,
}

impl AppState {
    /// Load the stored list; nothing else may mutate before this
    pub fn new(store: Box<dyn Storage>, config: &AppConfig) -> Self {
        let items = store.load().unwrap_or_default();
        info!(count = items.len(), "starting with stored items");

        Self {
            list: TodoList::new(items),
            ui: UiState::default(),
            labels: Labels::for_language(config.language),
            viewport: Viewport::from_config(config),
            listeners: OutsideClickListeners::default(),
            list_state: ListState::default(),
            list_area: None,
            store,
            edit_subscription: None,
            dropdown_subscription: None,
            search_subscription: None,
        }
    }

    /// Current input mode, derived from the state
    pub fn ui_mode(&self) -> UiMode {
        if self.ui.alert.is_some() {
            UiMode::Alert
        } else if self.list.editing_id().is_some() {
            UiMode::Editing
        } else if self.ui.dropdown_open {
            UiMode::FilterDropdown
        } else if self.ui.search_open {
            UiMode::Search
        } else {
            UiMode::Normal
        }
    }

    pub fn counts(&self) -> Counts {
        self.list.counts()
    }

    /// Collapse only applies on narrow layouts under the "all" filter
    pub fn collapse_active(&self) -> bool {
        self.ui.narrow && self.ui.filter == Filter::All && self.ui.collapse_completed
    }

    /// Whether the "hide/show completed" toggle is offered
    pub fn collapse_toggle_visible(&self) -> bool {
        self.ui.narrow && self.ui.filter == Filter::All && self.counts().has_completed()
    }

    /// Items of the main list
    pub fn displayed_items(&self) -> Vec<&Item> {
        self.list.filtered(self.ui.filter, self.collapse_active())
    }

    /// Search over the main list
    pub fn search_results(&self) -> SearchResult<'_> {
        let shown = self.displayed_items();
        self.list.search(&shown, &self.ui.search)
    }

    /// Ids of the rows that keyboard selection moves over
    pub fn active_rows(&self) -> Vec<ItemId> {
        if self.ui.search_open {
            self.search_results().matches().iter().map(|i| i.id).collect()
        } else {
            self.displayed_items().iter().map(|i| i.id).collect()
        }
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.active_rows().get(self.ui.selected).copied()
    }

    pub fn move_selection_up(&mut self) {
        self.ui.selected = self.ui.selected.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.ui.selected + 1 < self.active_rows().len() {
            self.ui.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.active_rows().len();
        if len == 0 {
            self.ui.selected = 0;
        } else if self.ui.selected >= len {
            self.ui.selected = len - 1;
        }
    }

    fn select_id(&mut self, id: ItemId) {
        if let Some(pos) = self.active_rows().iter().position(|row| *row == id) {
            self.ui.selected = pos;
        }
    }

    /// Write the whole list; a failure is logged and shown, never fatal
    fn persist(&mut self) {
        match self.store.save(self.list.items()) {
            Ok(()) => {
                debug!(count = self.list.len(), "saved list");
                self.ui.status = None;
            }
            Err(e) => {
                error!(error = %format!("{e:#}"), "failed to save list");
                self.ui.status = Some(format!("{}: {e:#}", self.labels.save_failed));
            }
        }
    }

    fn report(&mut self, err: ListError) {
        match err {
            ListError::EmptyInput => {}
            ListError::DuplicateName { text } => {
                debug!(text = %text, "rejected duplicate name");
                self.ui.alert = Some(self.labels.duplicate_name.to_string());
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.ui.alert = None;
    }

    pub fn input_push(&mut self, c: char) {
        self.ui.input.push(c);
    }

    pub fn input_pop(&mut self) {
        self.ui.input.pop();
    }

    pub fn input_clear(&mut self) {
        self.ui.input.clear();
    }

    /// Add the input buffer as a new item
    pub fn submit_input(&mut self) {
        match self.list.add(&self.ui.input) {
            Ok(id) => {
                self.ui.input.clear();
                self.persist();
                self.select_id(id);
            }
            Err(e) => self.report(e),
        }
    }

    pub fn toggle(&mut self, id: ItemId) {
        if self.list.toggle(id) {
            self.persist();
            self.clamp_selection();
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.toggle(id);
        }
    }

    pub fn delete(&mut self, id: ItemId) {
        if self.list.delete(id) {
            self.sync_edit_subscription();
            self.persist();
            self.clamp_selection();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.delete(id);
        }
    }

    pub fn delete_completed(&mut self) {
        if self.list.delete_completed() > 0 {
            self.sync_edit_subscription();
            self.persist();
            self.clamp_selection();
        }
    }

    pub fn start_edit(&mut self, id: ItemId) {
        if self.list.start_edit(id) && self.edit_subscription.is_none() {
            self.edit_subscription = Some(self.listeners.subscribe(OutsideTarget::EditField));
        }
    }

    pub fn start_edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.start_edit(id);
        }
    }

    pub fn edit_push(&mut self, c: char) {
        self.list.draft_push(c);
    }

    pub fn edit_pop(&mut self) {
        self.list.draft_pop();
    }

    /// Commit the inline edit (Enter, or a click outside the field)
    pub fn save_edit(&mut self) {
        match self.list.save_edit() {
            Ok(EditOutcome::Saved) => {
                self.sync_edit_subscription();
                self.persist();
                self.clamp_selection();
            }
            Ok(EditOutcome::Ignored) => self.sync_edit_subscription(),
            Err(e) => self.report(e),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.list.cancel_edit();
        self.sync_edit_subscription();
    }

    /// Release the edit-field listener once nothing is being edited
    fn sync_edit_subscription(&mut self) {
        if self.list.editing_id().is_none() {
            if let Some(sub) = self.edit_subscription.take() {
                self.listeners.unsubscribe(sub);
            }
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.ui.filter != filter {
            debug!(filter = filter.name(), "filter changed");
        }
        self.ui.filter = filter;
        self.ui.selected = 0;
    }

    /// Wide: next tab. Narrow: open/close the dropdown.
    pub fn cycle_filter(&mut self) {
        if self.ui.narrow {
            self.toggle_dropdown();
        } else {
            self.set_filter(self.ui.filter.next());
        }
    }

    pub fn open_dropdown(&mut self) {
        if !self.ui.narrow || self.ui.dropdown_open {
            return;
        }
        self.ui.dropdown_open = true;
        self.ui.dropdown_cursor = self.ui.filter.index();
        self.dropdown_subscription = Some(self.listeners.subscribe(OutsideTarget::FilterDropdown));
    }

    pub fn close_dropdown(&mut self) {
        self.ui.dropdown_open = false;
        if let Some(sub) = self.dropdown_subscription.take() {
            self.listeners.unsubscribe(sub);
        }
    }

    pub fn toggle_dropdown(&mut self) {
        if self.ui.dropdown_open {
            self.close_dropdown();
        } else {
            self.open_dropdown();
        }
    }

    pub fn dropdown_up(&mut self) {
        self.ui.dropdown_cursor = self.ui.dropdown_cursor.saturating_sub(1);
    }

    pub fn dropdown_down(&mut self) {
        if self.ui.dropdown_cursor + 1 < Filter::all().len() {
            self.ui.dropdown_cursor += 1;
        }
    }

    /// Apply the highlighted option and close
    pub fn dropdown_select(&mut self) {
        if let Some(filter) = Filter::all().get(self.ui.dropdown_cursor) {
            self.set_filter(*filter);
        }
        self.close_dropdown();
    }

    pub fn open_search(&mut self) {
        if self.ui.search_open {
            return;
        }
        self.close_dropdown();
        self.ui.search_open = true;
        self.ui.search.clear();
        self.ui.selected = 0;
        self.search_subscription = Some(self.listeners.subscribe(OutsideTarget::SearchOverlay));
    }

    /// Closing the overlay also forgets the query
    pub fn close_search(&mut self) {
        self.ui.search_open = false;
        self.ui.search.clear();
        if let Some(sub) = self.search_subscription.take() {
            self.listeners.unsubscribe(sub);
        }
        self.clamp_selection();
    }

    pub fn toggle_search(&mut self) {
        if self.ui.search_open {
            self.close_search();
        } else {
            self.open_search();
        }
    }

    pub fn search_push(&mut self, c: char) {
        self.ui.search.push(c);
        self.ui.selected = 0;
    }

    pub fn search_pop(&mut self) {
        self.ui.search.pop();
        self.ui.selected = 0;
    }

    pub fn toggle_collapse(&mut self) {
        if self.collapse_toggle_visible() {
            self.ui.collapse_completed = !self.ui.collapse_completed;
            self.clamp_selection();
        }
    }

    /// Terminal resized to `columns`
    pub fn on_resize(&mut self, columns: u16) {
        if self.viewport.observe(columns) {
            self.ui.narrow = self.viewport.is_narrow();
            info!(columns, narrow = self.ui.narrow, "layout class changed");
            if !self.ui.narrow {
                self.close_dropdown();
            }
            self.clamp_selection();
        }
    }

    /// Left mouse button pressed at (column, row)
    pub fn on_mouse_down(&mut self, column: u16, row: u16) {
        for target in self.listeners.outside_of(column, row) {
            match target {
                OutsideTarget::EditField => self.save_edit(),
                OutsideTarget::FilterDropdown => self.close_dropdown(),
                OutsideTarget::SearchOverlay => self.close_search(),
            }
        }

        if self.ui_mode() == UiMode::Normal {
            self.click_list(column, row);
        }
    }

    /// Click on a main-list row: checkbox column toggles, text starts an edit
    fn click_list(&mut self, column: u16, row: u16) {
        let Some(area) = self.list_area else {
            return;
        };
        let inner_top = area.y + 1;
        let inner_bottom = area.y + area.height.saturating_sub(1);
        if row < inner_top || row >= inner_bottom || column <= area.x || column >= area.x + area.width {
            return;
        }

        let index = self.list_state.offset() + usize::from(row - inner_top);
        let Some(id) = self.active_rows().get(index).copied() else {
            return;
        };
        self.ui.selected = index;

        // "[x] " occupies the first four cells inside the border
        if column < area.x + 5 {
            self.toggle(id);
        } else {
            self.start_edit(id);
        }
    }

    /// Release every listener (shutdown)
    pub fn teardown(&mut self) {
        debug!(count = self.listeners.len(), "releasing outside-click listeners");
        self.listeners.clear();
        self.edit_subscription = None;
        self.dropdown_subscription = None;
        self.search_subscription = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::EditState;
    use crate::persistence::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn create_test_app(items: Vec<Item>) -> (AppState, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::with_items(items));
        let app = AppState::new(Box::new(Rc::clone(&store)), &AppConfig::default());
        (app, store)
    }

    fn item(id: ItemId, text: &str, completed: bool) -> Item {
        let mut item = Item::new(id, text);
        item.completed = completed;
        item
    }

    fn type_input(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.input_push(c);
        }
    }

    fn texts(app: &AppState) -> Vec<String> {
        app.displayed_items().iter().map(|i| i.text.clone()).collect()
    }

    #[test]
    fn test_starts_from_stored_items() {
        let (app, store) = create_test_app(vec![item(1, "A", false)]);
        assert_eq!(app.list.len(), 1);
        assert_eq!(store.save_count(), 0);
        assert_eq!(app.ui_mode(), UiMode::Normal);
    }

    #[test]
    fn test_starts_empty_without_stored_state() {
        let store = Rc::new(MemoryStore::default());
        let app = AppState::new(Box::new(Rc::clone(&store)), &AppConfig::default());
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_submit_input_adds_and_saves_once() {
        let (mut app, store) = create_test_app(Vec::new());
        type_input(&mut app, "Buy milk");
        app.submit_input();

        assert_eq!(app.list.len(), 1);
        assert!(app.ui.input.is_empty());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.last_saved().unwrap()[0].text, "Buy milk");
    }

    #[test]
    fn test_submit_blank_input_is_silent() {
        let (mut app, store) = create_test_app(Vec::new());
        type_input(&mut app, "   ");
        app.submit_input();

        assert!(app.list.is_empty());
        assert_eq!(store.save_count(), 0);
        assert_eq!(app.ui.alert, None);
    }

    #[test]
    fn test_submit_duplicate_shows_alert() {
        let (mut app, store) = create_test_app(Vec::new());
        type_input(&mut app, "Buy milk");
        app.submit_input();
        type_input(&mut app, "buy MILK");
        app.submit_input();

        assert_eq!(app.list.len(), 1);
        assert_eq!(store.save_count(), 1);
        assert_eq!(app.ui_mode(), UiMode::Alert);
        assert_eq!(app.ui.alert.as_deref(), Some(app.labels.duplicate_name));
        // Input is kept so the user can fix it
        assert_eq!(app.ui.input, "buy MILK");

        app.dismiss_alert();
        assert_eq!(app.ui_mode(), UiMode::Normal);
    }

    #[test]
    fn test_toggle_saves_only_when_found() {
        let (mut app, store) = create_test_app(vec![item(1, "A", false)]);
        app.toggle(99);
        assert_eq!(store.save_count(), 0);
        app.toggle_selected();
        assert_eq!(store.save_count(), 1);
        assert!(app.list.get(1).unwrap().completed);
    }

    #[test]
    fn test_views_never_save() {
        let (mut app, store) = create_test_app(vec![item(1, "A", false), item(2, "B", true)]);
        app.set_filter(Filter::Done);
        let _ = app.displayed_items();
        app.open_search();
        app.search_push('a');
        let _ = app.search_results();
        app.close_search();
        app.on_resize(40);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_delete_completed_only_saves_when_removing() {
        let (mut app, store) = create_test_app(vec![item(1, "A", false)]);
        app.delete_completed();
        assert_eq!(store.save_count(), 0);

        app.toggle(1);
        app.delete_completed();
        assert_eq!(store.save_count(), 2);
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let (mut app, _store) = create_test_app(vec![item(1, "A", false), item(2, "B", false)]);
        app.move_selection_down();
        assert_eq!(app.selected_id(), Some(2));
        app.delete_selected();
        assert_eq!(app.selected_id(), Some(1));
        app.delete_selected();
        assert_eq!(app.selected_id(), None);
        app.move_selection_down();
        assert_eq!(app.ui.selected, 0);
    }

    #[test]
    fn test_edit_duplicate_stays_in_edit_mode() {
        let (mut app, store) = create_test_app(vec![item(1, "A", false), item(2, "B", false)]);
        app.start_edit(1);
        assert_eq!(app.ui_mode(), UiMode::Editing);
        assert!(app.listeners.is_subscribed(OutsideTarget::EditField));

        app.list.set_draft("B");
        app.save_edit();
        assert_eq!(app.ui_mode(), UiMode::Alert);
        assert_eq!(app.list.get(1).unwrap().text, "A");
        assert_eq!(store.save_count(), 0);

        app.dismiss_alert();
        assert_eq!(app.ui_mode(), UiMode::Editing);
        assert_eq!(
            app.list.edit_state(),
            &EditState::Editing {
                id: 1,
                draft: "B".to_string()
            }
        );

        app.cancel_edit();
        assert_eq!(app.ui_mode(), UiMode::Normal);
        assert!(app.listeners.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_edit_save_releases_listener() {
        let (mut app, store) = create_test_app(vec![item(1, "A", false)]);
        app.start_edit_selected();
        app.edit_pop();
        app.edit_push('Z');
        app.save_edit();

        assert_eq!(app.list.get(1).unwrap().text, "Z");
        assert_eq!(app.ui_mode(), UiMode::Normal);
        assert!(app.listeners.is_empty());
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_edit_empty_draft_keeps_editing() {
        let (mut app, store) = create_test_app(vec![item(1, "A", false)]);
        app.start_edit(1);
        app.edit_pop();
        app.save_edit();

        assert_eq!(app.ui_mode(), UiMode::Editing);
        assert_eq!(app.list.get(1).unwrap().text, "A");
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_click_outside_edit_field_saves() {
        let (mut app, store) = create_test_app(vec![item(1, "A", false)]);
        app.start_edit(1);
        app.list.set_draft("Renamed");
        app.listeners.set_area(OutsideTarget::EditField, Rect::new(0, 5, 40, 1));

        // Inside the field: nothing happens
        app.on_mouse_down(3, 5);
        assert_eq!(app.ui_mode(), UiMode::Editing);

        app.on_mouse_down(3, 20);
        assert_eq!(app.ui_mode(), UiMode::Normal);
        assert_eq!(app.list.get(1).unwrap().text, "Renamed");
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_dropdown_lifecycle_on_narrow_layout() {
        let (mut app, _store) = create_test_app(vec![item(1, "A", false)]);
        app.on_resize(60);
        assert!(app.ui.narrow);

        app.cycle_filter();
        assert_eq!(app.ui_mode(), UiMode::FilterDropdown);
        assert!(app.listeners.is_subscribed(OutsideTarget::FilterDropdown));

        app.dropdown_down();
        app.dropdown_down();
        app.dropdown_down();
        app.dropdown_select();
        assert_eq!(app.ui.filter, Filter::Done);
        assert!(!app.ui.dropdown_open);
        assert!(app.listeners.is_empty());
    }

    #[test]
    fn test_dropdown_closes_on_outside_click() {
        let (mut app, _store) = create_test_app(Vec::new());
        app.on_resize(60);
        app.open_dropdown();
        app.listeners.set_area(OutsideTarget::FilterDropdown, Rect::new(0, 3, 30, 5));

        app.on_mouse_down(50, 20);
        assert!(!app.ui.dropdown_open);
        assert!(app.listeners.is_empty());
    }

    #[test]
    fn test_dropdown_not_available_on_wide_layout() {
        let (mut app, _store) = create_test_app(Vec::new());
        app.on_resize(150);
        app.open_dropdown();
        assert!(!app.ui.dropdown_open);

        app.cycle_filter();
        assert_eq!(app.ui.filter, Filter::Pending);
    }

    #[test]
    fn test_growing_past_threshold_closes_dropdown() {
        let (mut app, _store) = create_test_app(Vec::new());
        app.on_resize(60);
        app.open_dropdown();
        app.on_resize(150);
        assert!(!app.ui.narrow);
        assert!(!app.ui.dropdown_open);
        assert!(app.listeners.is_empty());
    }

    #[test]
    fn test_collapse_falls_back_to_completed_items() {
        let (mut app, _store) = create_test_app(vec![item(1, "A", true), item(2, "B", true)]);
        app.on_resize(60);
        assert!(app.collapse_toggle_visible());
        app.toggle_collapse();
        assert!(app.collapse_active());
        assert_eq!(texts(&app), vec!["A", "B"]);

        app.toggle(1);
        assert_eq!(texts(&app), vec!["A"]);
    }

    #[test]
    fn test_collapse_toggle_hidden_on_wide_layout() {
        let (mut app, _store) = create_test_app(vec![item(1, "A", true), item(2, "B", false)]);
        app.on_resize(150);
        assert!(!app.collapse_toggle_visible());
        app.toggle_collapse();
        assert!(!app.ui.collapse_completed);

        // A flag left over from a narrow session has no effect when wide
        app.ui.collapse_completed = true;
        assert_eq!(texts(&app), vec!["A", "B"]);
    }

    #[test]
    fn test_search_states() {
        let (mut app, _store) = create_test_app(vec![item(1, "Buy milk", false), item(2, "Walk dog", false)]);
        app.open_search();
        assert_eq!(app.ui_mode(), UiMode::Search);
        assert_eq!(app.search_results(), SearchResult::NoQuery);
        assert!(app.active_rows().is_empty());

        for c in "MILK".chars() {
            app.search_push(c);
        }
        assert_eq!(app.active_rows(), vec![1]);

        for c in "xyz".chars() {
            app.search_push(c);
        }
        assert_eq!(app.search_results(), SearchResult::Matches(vec![]));

        app.close_search();
        assert!(app.ui.search.is_empty());
        assert!(app.listeners.is_empty());
    }

    #[test]
    fn test_search_overlay_closes_on_outside_click() {
        let (mut app, _store) = create_test_app(Vec::new());
        app.toggle_search();
        app.search_push('q');
        app.listeners.set_area(OutsideTarget::SearchOverlay, Rect::new(10, 2, 40, 10));

        app.on_mouse_down(12, 4);
        assert!(app.ui.search_open);

        app.on_mouse_down(0, 0);
        assert!(!app.ui.search_open);
        assert!(app.ui.search.is_empty());
    }

    #[test]
    fn test_search_respects_active_filter() {
        let (mut app, _store) = create_test_app(vec![item(1, "Task one", false), item(2, "Task two", true)]);
        app.set_filter(Filter::Done);
        app.open_search();
        app.search_push('t');
        assert_eq!(app.active_rows(), vec![2]);
    }

    #[test]
    fn test_failed_save_keeps_state_and_reports() {
        let (mut app, store) = create_test_app(Vec::new());
        store.fail_writes.set(true);
        type_input(&mut app, "Buy milk");
        app.submit_input();

        assert_eq!(app.list.len(), 1);
        assert!(app.ui.status.as_deref().unwrap().contains("disk full"));
        assert_eq!(app.ui_mode(), UiMode::Normal);

        store.fail_writes.set(false);
        app.toggle_selected();
        assert_eq!(app.ui.status, None);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_click_on_row_toggles_or_edits() {
        let (mut app, store) = create_test_app(vec![item(1, "A", false), item(2, "B", false)]);
        app.list_area = Some(Rect::new(0, 4, 40, 10));

        // Checkbox of the second row
        app.on_mouse_down(2, 6);
        assert!(app.list.get(2).unwrap().completed);
        assert_eq!(store.save_count(), 1);

        // Text of the first row
        app.on_mouse_down(10, 5);
        assert_eq!(app.list.editing_id(), Some(1));

        // Border row does nothing
        app.cancel_edit();
        app.on_mouse_down(10, 4);
        assert_eq!(app.ui_mode(), UiMode::Normal);
    }

    #[test]
    fn test_teardown_releases_listeners() {
        let (mut app, _store) = create_test_app(vec![item(1, "A", false)]);
        app.on_resize(60);
        app.start_edit(1);
        app.open_dropdown();
        app.open_search();
        app.teardown();
        assert!(app.listeners.is_empty());
    }
}
