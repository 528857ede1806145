//! CLI configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Configuration for the `scrutin` binary.
///
/// Can be loaded from a TOML file via [`CliConfig::from_toml_file`]; CLI
/// flags and environment variables override file values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Data directory for ledger storage.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Map size for the LMDB environment, in MiB.
    #[serde(default = "default_map_size_mb")]
    pub map_size_mb: usize,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_data_dir() -> PathBuf {
    PathBuf::from("./scrutin_data")
}

fn default_map_size_mb() -> usize {
    1024
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Map size for the LMDB environment, in bytes.
    pub fn map_size_bytes(&self) -> usize {
        self.map_size_mb * 1024 * 1024
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            map_size_mb: default_map_size_mb(),
            log_level: default_log_level(),
        }
    }
}
