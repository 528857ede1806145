//! LMDB storage backend for the scrutin vote ledger.
//!
//! Implements the [`scrutin_store::StateStore`] trait using the `heed`
//! LMDB bindings. The whole keyspace lives in a single named database
//! within one environment.

pub mod environment;
pub mod error;
pub mod state;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use state::LmdbStateStore;
