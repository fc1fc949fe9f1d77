use coinscope_core::{AssetId, CoinscopeError, IndicatorSeries, compute_indicators};

use crate::Coinscope;

impl Coinscope {
    /// Compute rolling indicators for one asset.
    ///
    /// Fetches the latest `history_limit` snapshots and computes the short and
    /// long SMA plus rolling volatility with the configured windows. Points
    /// inside a window's warm-up carry `None` for that indicator.
    ///
    /// # Errors
    /// Any error from [`fetch`](Self::fetch).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "coinscope::analyze", skip(self, asset), fields(asset = %asset))
    )]
    pub async fn analyze(&self, asset: &AssetId) -> Result<IndicatorSeries, CoinscopeError> {
        let series = self.fetch(asset, self.cfg.history_limit).await?;
        compute_indicators(&series, self.cfg.windows)
    }
}
