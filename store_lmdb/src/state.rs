//! LMDB implementation of `StateStore`.
//!
//! All records live in a single byte-keyed `state` database; keys are the
//! UTF-8 bytes of the string keys. Prefix scans use the range
//! `[prefix, increment_prefix(prefix))`. `put_if_absent` performs its
//! presence check and write inside one write transaction, which LMDB
//! serializes against all other writers.

use std::ops::Bound;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env};

use scrutin_store::{StateStore, StoreError};

use crate::LmdbError;

pub struct LmdbStateStore {
    env: Arc<Env>,
    state_db: Database<Bytes, Bytes>,
}

impl LmdbStateStore {
    pub(crate) fn new(env: Arc<Env>, state_db: Database<Bytes, Bytes>) -> Self {
        Self { env, state_db }
    }
}

/// Increment `prefix` in place to the smallest byte string strictly greater
/// than every string it prefixes, for use as an exclusive upper scan bound.
/// Returns `false` when no such bound exists (empty or all-`0xFF` prefix).
fn increment_prefix(prefix: &mut Vec<u8>) -> bool {
    while let Some(last) = prefix.last_mut() {
        if *last < 0xFF {
            *last += 1;
            return true;
        }
        prefix.pop();
    }
    false
}

impl StateStore for LmdbStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let value = self
            .state_db
            .get(&rtxn, key.as_bytes())
            .map_err(LmdbError::from)?;
        Ok(value.map(|v| v.to_vec()))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.state_db
            .put(&mut wtxn, key.as_bytes(), value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }

    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        let occupied = self
            .state_db
            .get(&wtxn, key.as_bytes())
            .map_err(LmdbError::from)?
            .is_some();
        if occupied {
            return Ok(false);
        }
        self.state_db
            .put(&mut wtxn, key.as_bytes(), value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(true)
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let lower = prefix.as_bytes();
        let mut upper = lower.to_vec();
        let bounded = increment_prefix(&mut upper);

        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let bounds = if bounded {
            (Bound::Included(lower), Bound::Excluded(upper.as_slice()))
        } else {
            (Bound::Included(lower), Bound::Unbounded)
        };
        let iter = self
            .state_db
            .range(&rtxn, &bounds)
            .map_err(LmdbError::from)?;

        let mut results = Vec::new();
        for entry in iter {
            let (key, value) = entry.map_err(LmdbError::from)?;
            let key = String::from_utf8(key.to_vec()).map_err(|_| {
                StoreError::Corruption("non-UTF-8 key in state database".to_string())
            })?;
            results.push((key, value.to_vec()));
        }
        Ok(results)
    }
}
