use std::num::NonZeroUsize;

use async_trait::async_trait;

use crate::{AssetId, CoinscopeError, Observation, Series};

/// Source of per-asset price history.
///
/// Implementations wrap whatever persistence holds the snapshots. A store is
/// passed explicitly to the orchestrator; there is no process-wide handle.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Stable store name used in error tagging and logs.
    fn name(&self) -> &'static str;

    /// Fetch the most recent `limit` observations for `asset`, ascending by time.
    ///
    /// # Errors
    /// Must return `CoinscopeError::NoData` when nothing is stored for the
    /// asset rather than an empty series. Other failures should use
    /// `CoinscopeError::Store`.
    async fn latest(&self, asset: &AssetId, limit: NonZeroUsize) -> Result<Series, CoinscopeError>;

    /// Skip the `skip` newest observations and return up to `limit` of the
    /// next ones, newest first, with the total stored count.
    ///
    /// The default reads the whole history through [`latest`](Self::latest)
    /// and slices it in memory. Stores that can count and skip natively
    /// should override it.
    ///
    /// # Errors
    /// Same contract as [`latest`](Self::latest).
    async fn slice(
        &self,
        asset: &AssetId,
        skip: usize,
        limit: NonZeroUsize,
    ) -> Result<HistorySlice, CoinscopeError> {
        let all = self.latest(asset, NonZeroUsize::MAX).await?;
        let newest_first = all
            .observations()
            .iter()
            .rev()
            .skip(skip)
            .take(limit.get())
            .copied()
            .collect();
        Ok(HistorySlice {
            total: all.len(),
            newest_first,
        })
    }
}

/// A window into an asset's stored history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySlice {
    /// Number of observations stored for the asset.
    pub total: usize,
    /// The requested observations, newest first.
    pub newest_first: Vec<Observation>,
}
