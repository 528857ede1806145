//! LMDB environment setup.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};

use crate::state::LmdbStateStore;
use crate::LmdbError;

/// Default map size for the LMDB environment: 1 GiB of reserved address
/// space (pages are only allocated as data is written).
pub const DEFAULT_MAP_SIZE: usize = 1024 * 1024 * 1024;

const STATE_DB_NAME: &str = "state";

/// Wraps the LMDB environment and the state database handle.
pub struct LmdbEnvironment {
    env: Arc<Env>,
    state_db: Database<Bytes, Bytes>,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given path.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        fs::create_dir_all(path)?;
        // Safety contract of EnvOpenOptions::open: the path must not be
        // opened concurrently by this process with different options.
        let env = unsafe { EnvOpenOptions::new().map_size(map_size).max_dbs(1).open(path)? };
        let mut wtxn = env.write_txn()?;
        let state_db: Database<Bytes, Bytes> =
            env.create_database(&mut wtxn, Some(STATE_DB_NAME))?;
        wtxn.commit()?;
        tracing::debug!(path = %path.display(), map_size, "opened LMDB environment");
        Ok(Self {
            env: Arc::new(env),
            state_db,
        })
    }

    /// Open with [`DEFAULT_MAP_SIZE`].
    pub fn open_default(path: &Path) -> Result<Self, LmdbError> {
        Self::open(path, DEFAULT_MAP_SIZE)
    }

    /// Handle to the state store backed by this environment.
    pub fn state_store(&self) -> LmdbStateStore {
        LmdbStateStore::new(Arc::clone(&self.env), self.state_db)
    }
}
