use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::storage::Storage;

/// In-memory storage for tests and ephemeral runs. Everything is lost when
/// the value is dropped.
#[derive(Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .slots
            .read()
            .expect("storage lock poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots
            .write()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.slots
            .write()
            .expect("storage lock poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_what_set_stored() {
        let storage = MemoryStorage::new();
        assert!(storage.get("accounts").unwrap().is_none());

        storage.set("accounts", "[]").unwrap();
        assert_eq!(storage.get("accounts").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_clears_the_slot_and_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set("current_account", "{}").unwrap();

        storage.remove("current_account").unwrap();
        assert!(storage.get("current_account").unwrap().is_none());

        storage.remove("current_account").unwrap();
        assert!(storage.get("current_account").unwrap().is_none());
    }
}
