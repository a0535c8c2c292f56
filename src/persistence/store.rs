use super::files::{atomic_write, read_file};
use crate::domain::Item;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Durable storage for the whole list
///
/// `load` runs once at startup; `save` replaces everything after each mutation.
pub trait Storage {
    /// Prior list, or None when nothing (valid) was stored
    fn load(&self) -> Option<Vec<Item>>;

    fn save(&self, items: &[Item]) -> Result<()>;
}

/// JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStore {
    fn load(&self) -> Option<Vec<Item>> {
        let content = match read_file(&self.path) {
            Ok(Some(content)) => content,
            Ok(None) => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read stored list");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Item>>(&content) {
            Ok(items) => {
                info!(path = %self.path.display(), count = items.len(), "loaded list");
                Some(items)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "stored list is malformed, starting empty");
                None
            }
        }
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        atomic_write(&self.path, &json)?;
        Ok(())
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub initial: Option<Vec<Item>>,
    pub saves: std::cell::RefCell<Vec<Vec<Item>>>,
    pub fail_writes: std::cell::Cell<bool>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            initial: Some(items),
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }

    pub fn last_saved(&self) -> Option<Vec<Item>> {
        self.saves.borrow().last().cloned()
    }
}

#[cfg(test)]
impl Storage for MemoryStore {
    fn load(&self) -> Option<Vec<Item>> {
        self.initial.clone()
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        if self.fail_writes.get() {
            anyhow::bail!("disk full");
        }
        self.saves.borrow_mut().push(items.to_vec());
        Ok(())
    }
}

#[cfg(test)]
impl<S: Storage + ?Sized> Storage for std::rc::Rc<S> {
    fn load(&self) -> Option<Vec<Item>> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        (**self).save(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Vec<Item> {
        let mut done = Item::new(2, "Walk dog");
        done.completed = true;
        vec![Item::new(1, "Buy milk"), done]
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = tempdir().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("todos.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("todos.json"));

        store.save(&sample()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, sample());

        // Saving what was just loaded reproduces the same file
        let before = fs::read_to_string(store.path()).unwrap();
        store.save(&loaded).unwrap();
        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_stored_format() {
        let temp_dir = tempdir().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("todos.json"));
        store.save(&sample()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            raw,
            r#"[{"id":1,"text":"Buy milk","completed":false},{"id":2,"text":"Walk dog","completed":true}]"#
        );
    }

    #[test]
    fn test_malformed_file_is_none() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("todos.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_wrong_shape_is_none() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("todos.json");
        fs::write(&path, r#"[{"id":"x","text":1}]"#).unwrap();

        assert_eq!(JsonFileStore::new(&path).load(), None);
    }

    #[test]
    fn test_empty_array_loads_as_empty_list() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("todos.json");
        fs::write(&path, "[]").unwrap();

        assert_eq!(JsonFileStore::new(&path).load(), Some(Vec::new()));
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let temp_dir = tempdir().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("missing").join("todos.json"));
        assert!(store.save(&sample()).is_err());
    }
}
