use std::num::NonZeroUsize;

use coinscope_core::{
    AssetId, CoinscopeError, DeviationSummary, HistoryPage, Observation, sample_std,
};

use crate::Coinscope;
use crate::core::tag_err;

/// Bounds on the number of prices a deviation summary may cover.
const DEVIATION_LIMITS: std::ops::RangeInclusive<usize> = 2..=10_000;
/// Largest page a history request may ask for.
const MAX_HISTORY_PAGE: usize = 1_000;

impl Coinscope {
    /// Most recent stored snapshot for an asset.
    ///
    /// # Errors
    /// Any error from [`fetch`](Self::fetch).
    pub async fn latest(&self, asset: &AssetId) -> Result<Observation, CoinscopeError> {
        let series = self.fetch(asset, 1).await?;
        series
            .last()
            .copied()
            .ok_or_else(|| CoinscopeError::no_data(asset.as_str()))
    }

    /// Sample standard deviation over the latest `limit` prices.
    ///
    /// Non-finite prices are skipped. `samples` reports how many prices were
    /// used, which may be fewer than `limit` for a young asset.
    ///
    /// # Errors
    /// `InvalidArg` if `limit` is outside 2..=10000 or fewer than two prices
    /// are stored, otherwise any error from [`fetch`](Self::fetch).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "coinscope::deviation", skip(self, asset), fields(asset = %asset))
    )]
    pub async fn deviation(
        &self,
        asset: &AssetId,
        limit: usize,
    ) -> Result<DeviationSummary, CoinscopeError> {
        if !DEVIATION_LIMITS.contains(&limit) {
            return Err(CoinscopeError::InvalidArg(format!(
                "deviation limit must be within {}..={}, got {limit}",
                DEVIATION_LIMITS.start(),
                DEVIATION_LIMITS.end()
            )));
        }
        let series = self.fetch(asset, limit).await?;
        let prices: Vec<f64> = series
            .prices()
            .into_iter()
            .filter(|p| p.is_finite())
            .collect();
        if prices.len() < 2 {
            return Err(CoinscopeError::InvalidArg(format!(
                "deviation needs at least 2 prices for {asset}, found {}",
                prices.len()
            )));
        }
        Ok(DeviationSummary {
            asset: asset.clone(),
            stddev: sample_std(&prices),
            samples: prices.len(),
        })
    }

    /// One page of stored snapshots for an asset, newest first.
    ///
    /// Pages are 1-based. A page past the end is returned empty with the
    /// real `total`, so callers can still render page counts.
    ///
    /// # Errors
    /// `InvalidArg` if `page` is 0 or `limit` is outside 1..=1000, otherwise
    /// `NoData`, `StoreTimeout` or `Store` from the store call.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "coinscope::history", skip(self, asset), fields(asset = %asset))
    )]
    pub async fn history(
        &self,
        asset: &AssetId,
        page: usize,
        limit: usize,
    ) -> Result<HistoryPage, CoinscopeError> {
        if page == 0 {
            return Err(CoinscopeError::InvalidArg("history page starts at 1".into()));
        }
        let size = NonZeroUsize::new(limit)
            .filter(|n| n.get() <= MAX_HISTORY_PAGE)
            .ok_or_else(|| {
                CoinscopeError::InvalidArg(format!(
                    "history limit must be within 1..={MAX_HISTORY_PAGE}, got {limit}"
                ))
            })?;
        let skip = (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| CoinscopeError::InvalidArg(format!("history page {page} is out of range")))?;

        let name = self.store.name();
        let slice = Self::store_call_with_timeout(
            name,
            asset,
            self.cfg.store_timeout,
            self.store.slice(asset, skip, size),
        )
        .await
        .map_err(|e| tag_err(name, e))?;

        if slice.total == 0 {
            return Err(CoinscopeError::no_data(asset.as_str()));
        }
        Ok(HistoryPage {
            asset: asset.clone(),
            page,
            limit,
            total: slice.total,
            pages: slice.total.div_ceil(limit),
            data: slice.newest_first,
        })
    }
}
