//! Record encoding at the store boundary.

use scrutin_store::StoreError;
use scrutin_types::Record;

use crate::error::LedgerError;

pub(crate) fn encode(record: &Record) -> Result<Vec<u8>, LedgerError> {
    record
        .to_bytes()
        .map_err(|e| StoreError::Serialization(e.to_string()).into())
}

pub(crate) fn decode(key: &str, bytes: &[u8]) -> Result<Record, LedgerError> {
    Record::from_bytes(bytes).map_err(|e| LedgerError::CorruptRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
