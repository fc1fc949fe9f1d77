use std::time::Duration;

use coinscope_core::{AlignedTable, AssetId, CoinscopeError, Series, align, estimate_step_seconds};

use crate::Coinscope;

/// Grid step used when no asset has enough history to infer a cadence.
const FALLBACK_GRID_STEP: Duration = Duration::from_secs(120);

impl Coinscope {
    /// Fetch several assets and align them onto one time grid.
    ///
    /// Behavior and trade-offs:
    /// - Fetches the latest `correlation_limit` snapshots per asset concurrently.
    /// - Fail-fast: the first asset that cannot be loaded fails the whole call,
    ///   so a table never silently covers fewer assets than requested.
    /// - Uses the configured grid step, or the coarsest per-asset cadence when
    ///   the step is inferred.
    /// - Columns follow the order of `assets`.
    ///
    /// # Errors
    /// `InvalidArg` for an empty or duplicated list, any fetch error for the
    /// first failing asset, or `RequestTimeout` if the overall deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "coinscope::aligned", skip(self, assets), fields(assets = assets.len()))
    )]
    pub async fn aligned(&self, assets: &[AssetId]) -> Result<AlignedTable, CoinscopeError> {
        super::check_assets(assets, "alignment")?;

        let fetches = assets
            .iter()
            .map(|asset| self.fetch(asset, self.cfg.correlation_limit));
        let series: Vec<Series> = self
            .with_request_deadline("aligned", futures::future::try_join_all(fetches))
            .await??;

        let step = self.cfg.grid_step.unwrap_or_else(|| infer_grid_step(&series));
        #[cfg(feature = "tracing")]
        tracing::debug!(step_secs = step.as_secs(), "aligning on grid");
        align(&series, step)
    }
}

/// Coarsest inferable cadence across all series.
fn infer_grid_step(series: &[Series]) -> Duration {
    series
        .iter()
        .filter_map(estimate_step_seconds)
        .max()
        .and_then(|secs| u64::try_from(secs).ok())
        .map_or(FALLBACK_GRID_STEP, Duration::from_secs)
}
