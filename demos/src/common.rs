use std::path::PathBuf;
use std::sync::Arc;

use coinscope::{AssetId, CoinscopeError, SeriesStore};

use crate::file_store::JsonDirStore;

/// Assets analyzed when `COINSCOPE_COINS` is not set.
pub const DEFAULT_COINS: &str = "bitcoin,ethereum,matic-network";

/// Return a store for examples.
///
/// Reads snapshot files from `COINSCOPE_DATA_DIR` when it is set, otherwise
/// falls back to the deterministic fixture store.
#[must_use]
pub fn get_store() -> Arc<dyn SeriesStore> {
    match std::env::var_os("COINSCOPE_DATA_DIR") {
        Some(dir) => {
            println!("--- (Reading snapshots from {}) ---", PathBuf::from(&dir).display());
            Arc::new(JsonDirStore::new(dir))
        }
        None => {
            println!("--- (Using Mock Store) ---");
            Arc::new(coinscope_mock::MockStore::new())
        }
    }
}

/// Assets to analyze, from `COINSCOPE_COINS` (comma-separated).
///
/// # Errors
/// Returns `InvalidArg` if the list contains a blank entry.
pub fn coins() -> Result<Vec<AssetId>, CoinscopeError> {
    let raw = std::env::var("COINSCOPE_COINS").unwrap_or_else(|_| DEFAULT_COINS.to_string());
    parse_coins(&raw)
}

/// Parse a comma-separated asset list.
///
/// # Errors
/// Returns `InvalidArg` if the list contains a blank entry.
pub fn parse_coins(raw: &str) -> Result<Vec<AssetId>, CoinscopeError> {
    raw.split(',').map(AssetId::new).collect()
}

/// Directory rendered artifacts are written to, from `COINSCOPE_OUTPUT_DIR`.
#[must_use]
pub fn output_dir() -> PathBuf {
    std::env::var_os("COINSCOPE_OUTPUT_DIR").map_or_else(|| PathBuf::from("outputs"), PathBuf::from)
}

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Suggested: `RUST_LOG=info,coinscope=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
