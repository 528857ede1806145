//! In-memory state store used as a test substitute for the LMDB backend.

use scrutin_store::{StateStore, StoreError};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// An in-memory [`StateStore`] for tests.
///
/// Backed by a `BTreeMap` so `scan_prefix` returns records in key order,
/// matching the LMDB backend. Thread-safe for use in concurrency tests.
pub struct NullStateStore {
    records: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl NullStateStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NullStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for NullStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        let mut records = self.records.lock().unwrap();
        if records.contains_key(key) {
            return Ok(false);
        }
        records.insert(key.to_string(), value.to_vec());
        Ok(true)
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get() {
        let store = NullStateStore::new();
        store.put("k1", b"v1").unwrap();
        assert_eq!(store.get("k1").unwrap(), Some(b"v1".to_vec()));
        assert_eq!(store.get("k2").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let store = NullStateStore::new();
        store.put("k", b"old").unwrap();
        store.put("k", b"new").unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_if_absent_keeps_first_value() {
        let store = NullStateStore::new();
        assert!(store.put_if_absent("k", b"first").unwrap());
        assert!(!store.put_if_absent("k", b"second").unwrap());
        assert_eq!(store.get("k").unwrap(), Some(b"first".to_vec()));
    }

    #[test]
    fn test_scan_prefix_is_ordered_and_bounded() {
        let store = NullStateStore::new();
        store.put("vote:e1:s2", b"b").unwrap();
        store.put("vote:e1:s1", b"a").unwrap();
        store.put("vote:e10:s1", b"x").unwrap();
        store.put("election:e1", b"e").unwrap();

        let scanned = store.scan_prefix("vote:e1:").unwrap();
        let keys: Vec<&str> = scanned.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["vote:e1:s1", "vote:e1:s2"]);
    }

    #[test]
    fn test_scan_empty_prefix_returns_everything() {
        let store = NullStateStore::new();
        store.put("a", b"1").unwrap();
        store.put("b", b"2").unwrap();
        assert_eq!(store.scan_prefix("").unwrap().len(), 2);
    }
}
