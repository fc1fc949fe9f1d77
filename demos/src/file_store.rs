//! A series store backed by a directory of JSON snapshot files.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use async_trait::async_trait;
use coinscope::{AssetId, CoinscopeError, Observation, Series, SeriesStore};

/// Reads `<dir>/<asset>.json`, an array of observations such as
/// `{"ts": "2024-01-01T00:00:00Z", "price": 42000.0, "market_cap": null, "change_24h": null}`.
///
/// A missing file is `NoData`; unreadable or malformed files are store errors.
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Store reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SeriesStore for JsonDirStore {
    fn name(&self) -> &'static str {
        "json-dir"
    }

    async fn latest(&self, asset: &AssetId, limit: NonZeroUsize) -> Result<Series, CoinscopeError> {
        let path = self.dir.join(format!("{asset}.json"));
        let bytes = match tokio::fs::read(&path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoinscopeError::no_data(asset.as_str()));
            }
            Err(e) => return Err(CoinscopeError::store(self.name(), e.to_string())),
        };
        let observations: Vec<Observation> = serde_json::from_slice(&bytes).map_err(|e| {
            CoinscopeError::store(self.name(), format!("{}: {e}", path.display()))
        })?;
        if observations.is_empty() {
            return Err(CoinscopeError::no_data(asset.as_str()));
        }
        Ok(Series::new(asset.clone(), observations).tail(limit.get()))
    }
}
