use crate::domain::{filter_items, name_key, next_id, search_items, Counts, Filter, Item, ItemId, SearchResult};
use thiserror::Error;
use tracing::debug;

/// Validation failures of list mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Blank input, silently ignored by the UI
    #[error("text is empty")]
    EmptyInput,
    /// Another item already has this name (case-insensitive)
    #[error("an item named \"{text}\" already exists")]
    DuplicateName { text: String },
}

/// Inline edit state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { id: ItemId, draft: String },
}

/// Outcome of `save_edit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text replaced, edit mode left
    Saved,
    /// Nothing to do (not editing, or blank draft); edit mode unchanged
    Ignored,
}

/// Owns the items and the edit state
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<Item>,
    edit: EditState,
}

impl TodoList {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            edit: EditState::Idle,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Whether some item other than `except` already uses this name
    fn is_duplicate(&self, text: &str, except: Option<ItemId>) -> bool {
        let key = name_key(text);
        self.items
            .iter()
            .any(|i| Some(i.id) != except && i.name_key() == key)
    }

    /// Append a new pending item, returning its id
    pub fn add(&mut self, text: &str) -> Result<ItemId, ListError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ListError::EmptyInput);
        }
        if self.is_duplicate(text, None) {
            return Err(ListError::DuplicateName {
                text: text.to_string(),
            });
        }

        let id = next_id(&self.items);
        self.items.push(Item::new(id, text));
        debug!(id, text, "added item");
        Ok(id)
    }

    /// Flip completion; false when the id is unknown
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.toggle();
                debug!(id, completed = item.completed, "toggled item");
                true
            }
            None => false,
        }
    }

    /// Remove by id; false when the id is unknown
    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() != before;

        if removed {
            if self.editing_id() == Some(id) {
                self.edit = EditState::Idle;
            }
            debug!(id, "deleted item");
        }
        removed
    }

    /// Remove every completed item, returning how many were removed
    pub fn delete_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.completed);
        let removed = before - self.items.len();

        if let Some(id) = self.editing_id() {
            if self.get(id).is_none() {
                self.edit = EditState::Idle;
            }
        }
        debug!(removed, "deleted completed items");
        removed
    }

    #[cfg(test)]
    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        match &self.edit {
            EditState::Editing { id, .. } => Some(*id),
            EditState::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.edit {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Enter edit mode seeded with the item's text; replaces any edit in progress
    pub fn start_edit(&mut self, id: ItemId) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        self.edit = EditState::Editing {
            id,
            draft: item.text.clone(),
        };
        true
    }

    #[cfg(test)]
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditState::Editing { draft, .. } = &mut self.edit {
            *draft = text.into();
        }
    }

    pub fn draft_push(&mut self, c: char) {
        if let EditState::Editing { draft, .. } = &mut self.edit {
            draft.push(c);
        }
    }

    pub fn draft_pop(&mut self) {
        if let EditState::Editing { draft, .. } = &mut self.edit {
            draft.pop();
        }
    }

    /// Commit the draft
    ///
    /// A duplicate name is rejected and leaves the edit (and draft) in place.
    pub fn save_edit(&mut self) -> Result<EditOutcome, ListError> {
        let EditState::Editing { id, draft } = &self.edit else {
            return Ok(EditOutcome::Ignored);
        };
        let id = *id;
        let text = draft.trim().to_string();

        if text.is_empty() {
            return Ok(EditOutcome::Ignored);
        }
        if self.is_duplicate(&text, Some(id)) {
            return Err(ListError::DuplicateName { text });
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.text = text;
            debug!(id, text = %item.text, "renamed item");
        }
        self.edit = EditState::Idle;
        Ok(EditOutcome::Saved)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Rename without going through the edit state (headless use)
    pub fn rename(&mut self, id: ItemId, text: &str) -> Result<bool, ListError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ListError::EmptyInput);
        }
        if self.is_duplicate(text, Some(id)) {
            return Err(ListError::DuplicateName {
                text: text.to_string(),
            });
        }
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.text = text.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn filtered(&self, filter: Filter, collapse: bool) -> Vec<&Item> {
        filter_items(&self.items, filter, collapse)
    }

    pub fn search<'a>(&self, list: &[&'a Item], query: &str) -> SearchResult<'a> {
        search_items(list, query)
    }

    pub fn counts(&self) -> Counts {
        Counts::of(&self.items)
    }
}
