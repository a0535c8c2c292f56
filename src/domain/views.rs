use super::enums::Filter;
use super::item::Item;

/// Live counts shown next to the filter labels and in the progress line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl Counts {
    pub fn of(items: &[Item]) -> Self {
        let completed = items.iter().filter(|i| i.completed).count();
        Self {
            total: items.len(),
            pending: items.len() - completed,
            completed,
        }
    }

    /// Count displayed next to a filter label
    pub fn count_for(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Pending => self.pending,
            Filter::Done => self.completed,
        }
    }

    /// Completed / total, 0.0 for an empty list
    pub fn progress_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn has_completed(&self) -> bool {
        self.completed > 0
    }
}

/// Items visible under `filter`
///
/// With `collapse` set and the `All` filter, completed items are folded away:
/// the pending subset is shown, or the completed subset when nothing is pending.
pub fn filter_items(items: &[Item], filter: Filter, collapse: bool) -> Vec<&Item> {
    if filter == Filter::All && collapse {
        let pending: Vec<&Item> = items.iter().filter(|i| !i.completed).collect();
        if !pending.is_empty() {
            return pending;
        }
        return items.iter().filter(|i| i.completed).collect();
    }

    items.iter().filter(|i| filter.admits(i.completed)).collect()
}

/// Outcome of a search over the displayed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<'a> {
    /// Nothing typed yet (distinct from an empty match list)
    NoQuery,
    Matches(Vec<&'a Item>),
}

impl<'a> SearchResult<'a> {
    pub fn matches(&self) -> &[&'a Item] {
        match self {
            Self::NoQuery => &[],
            Self::Matches(items) => items,
        }
    }
}

/// Case-insensitive substring search; a blank query yields `NoQuery`
pub fn search_items<'a>(list: &[&'a Item], query: &str) -> SearchResult<'a> {
    let query = query.trim();
    if query.is_empty() {
        return SearchResult::NoQuery;
    }

    // Matches against the trimmed query: "milk " still finds "Buy milk"
    let lowered = query.to_lowercase();
    SearchResult::Matches(list.iter().copied().filter(|i| i.matches(&lowered)).collect())
}

/// Checkbox glyph for an item row
pub fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}
