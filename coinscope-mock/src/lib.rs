//! Deterministic series stores for CI-safe tests and examples.
//!
//! [`MockStore`] serves static fixtures; [`DynamicMockStore`] is driven by a
//! [`DynamicMockController`] so tests can script success, failure and hangs
//! per asset.
#![warn(missing_docs)]

use std::num::NonZeroUsize;

use async_trait::async_trait;
use coinscope_core::{AssetId, CoinscopeError, Series, SeriesStore};

mod dynamic;
pub mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockStore, MockBehavior};

/// Mock store for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Special asset ids:
/// - `FAIL` fails with a store error.
/// - `TIMEOUT` sleeps 200ms before answering with no data.
/// - `EMPTY` answers `Ok` with an empty series, which a well-behaved store never does.
pub struct MockStore;

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Store serving the fixtures in [`fixtures`].
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Asset ids with fixture data.
    #[must_use]
    pub const fn known_assets() -> &'static [&'static str] {
        &["bitcoin", "ethereum", "matic-network", "late-coin"]
    }
}

#[async_trait]
impl SeriesStore for MockStore {
    fn name(&self) -> &'static str {
        "coinscope-mock"
    }

    async fn latest(&self, asset: &AssetId, limit: NonZeroUsize) -> Result<Series, CoinscopeError> {
        match asset.as_str() {
            "FAIL" => {
                return Err(CoinscopeError::store(
                    self.name(),
                    format!("forced failure: {asset}"),
                ));
            }
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            }
            "EMPTY" => return Ok(Series::new(asset.clone(), Vec::new())),
            _ => {}
        }
        let observations =
            fixtures::by_asset(asset.as_str()).ok_or_else(|| CoinscopeError::no_data(asset.as_str()))?;
        Ok(Series::new(asset.clone(), observations).tail(limit.get()))
    }
}
