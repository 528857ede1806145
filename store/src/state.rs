//! The state store trait.

use crate::StoreError;

/// An ordered, string-keyed byte store.
///
/// Keys live in one flat keyspace; values are opaque byte sequences (the
/// ledger layers encode JSON records into them). Implementations must be
/// safe to share across threads; a failed write surfaces as an error and
/// never silently loses data.
pub trait StateStore: Send + Sync {
    /// Read the record at `key`. An absent key is `Ok(None)`, never an error.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write the record at `key`, overwriting any existing value.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Write the record at `key` only if the key is currently absent.
    ///
    /// Returns `true` if the value was written, `false` if a record already
    /// existed (the store is left unchanged). The presence check and the
    /// write are atomic with respect to concurrent writers.
    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<bool, StoreError>;

    /// All records whose key starts with `prefix`, in ascending key order.
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError>;
}
