//! Key-value storage seam
//!
//! The browser build backs this with `window.localStorage`; tests and
//! non-browser callers use [`MemoryStorage`].

use std::cell::RefCell;
use std::collections::HashMap;

/// String key-value store with `localStorage` semantics
///
/// Writes are best-effort: a store that cannot persist (quota, private mode)
/// drops the value silently, the same way the browser adapter does.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::rc::Rc<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key)
    }
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("cart"), None);

        storage.set_item("cart", "[]");
        assert_eq!(storage.get_item("cart").as_deref(), Some("[]"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("cart");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_shared_reference_writes_through() {
        let storage = std::rc::Rc::new(MemoryStorage::new());
        let handle = storage.clone();
        handle.set_item("k", "v");
        assert_eq!(storage.get_item("k").as_deref(), Some("v"));
    }
}
