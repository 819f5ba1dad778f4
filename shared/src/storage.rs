//! String key/value persistence behind the store.
//!
//! The browser backs this with `localStorage` / `sessionStorage`, the CLI with
//! one JSON file per key. Tests use [`MemoryStorage`].

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{StoreError, StoreResult};

/// Minimal Web Storage shaped interface.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}

/// In-process storage. Clones share the same entries, so a test can keep a
/// handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Stored keys in order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Read and decode the JSON value under `key`. `Ok(None)` when absent.
pub fn load_json<T, S>(storage: &S, key: &str) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })
}

/// Encode `value` as JSON and write it under `key`.
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.set_item(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set_item("omega_pages", "[]").expect("set item");
        assert_eq!(handle.get_item("omega_pages").expect("get item").as_deref(), Some("[]"));
        handle.remove_item("omega_pages").expect("remove item");
        assert!(storage.is_empty());
    }

    #[test]
    fn load_json_reports_corrupt_key() {
        let storage = MemoryStorage::new();
        storage.set_item("omega_media", "{not json").expect("set item");
        let err = load_json::<Vec<String>, _>(&storage, "omega_media").expect_err("corrupt");
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert_eq!(err.key(), "omega_media");
    }

    #[test]
    fn load_json_absent_is_none() {
        let storage = MemoryStorage::new();
        let loaded = load_json::<Vec<String>, _>(&storage, "omega_media").expect("load");
        assert!(loaded.is_none());

        save_json(&storage, "omega_media", &vec!["a".to_string()]).expect("save");
        let loaded = load_json::<Vec<String>, _>(&storage, "omega_media").expect("load");
        assert_eq!(loaded, Some(vec!["a".to_string()]));
    }
}
