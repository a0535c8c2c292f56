pub mod enums;
pub mod item;
pub mod views;

pub use enums::{Filter, UiMode};
pub use item::{name_key, next_id, Item, ItemId};
pub use views::{checkbox, filter_items, search_items, Counts, SearchResult};
