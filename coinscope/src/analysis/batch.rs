use coinscope_core::{
    AnalysisReport, AssetId, AssetWarning, CoinscopeError, IndicatorSeries, IndicatorWindows,
    compute_indicators,
};

use crate::Coinscope;

/// Builder to run indicator analysis over many assets at once.
pub struct AnalyzeBuilder<'a> {
    pub(crate) coinscope: &'a Coinscope,
    pub(crate) assets: Vec<AssetId>,
    pub(crate) windows: IndicatorWindows,
}

impl<'a> AnalyzeBuilder<'a> {
    /// Create a new builder bound to a `Coinscope` instance.
    ///
    /// Starts with an empty asset list and the orchestrator's windows.
    #[must_use]
    pub const fn new(coinscope: &'a Coinscope) -> Self {
        Self {
            coinscope,
            assets: Vec::new(),
            windows: coinscope.cfg.windows,
        }
    }

    /// Replace the asset list.
    ///
    /// # Errors
    /// Returns an error if the list contains the same asset twice.
    pub fn assets(mut self, assets: &[AssetId]) -> Result<Self, CoinscopeError> {
        if let Some(dup) = assets
            .iter()
            .enumerate()
            .find_map(|(i, a)| assets[..i].contains(a).then_some(a))
        {
            return Err(CoinscopeError::InvalidArg(format!(
                "duplicate asset '{dup}' in assets list"
            )));
        }
        self.assets = assets.to_vec();
        Ok(self)
    }

    /// Append a single asset.
    ///
    /// # Errors
    /// Returns an error if the asset is already in the list.
    pub fn add_asset(mut self, asset: AssetId) -> Result<Self, CoinscopeError> {
        if self.assets.contains(&asset) {
            return Err(CoinscopeError::InvalidArg(format!(
                "duplicate asset '{asset}' already exists in assets list"
            )));
        }
        self.assets.push(asset);
        Ok(self)
    }

    /// Override the indicator windows for this batch only.
    #[must_use]
    pub const fn windows(mut self, windows: IndicatorWindows) -> Self {
        self.windows = windows;
        self
    }

    /// Fetch and analyze every asset concurrently.
    ///
    /// Behavior:
    /// - Each asset is fetched and computed independently; a failure is
    ///   recorded in `warnings` and the others still complete.
    /// - `entries` keep request order.
    ///
    /// # Errors
    /// Returns an error only if no assets are specified, the windows are
    /// invalid, or the overall request deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinscope::analyze_batch",
            skip(self),
            fields(assets = self.assets.len()),
        )
    )]
    pub async fn run(self) -> Result<AnalysisReport, CoinscopeError> {
        super::check_assets(&self.assets, "analysis")?;
        if !self.windows.is_valid() {
            return Err(CoinscopeError::InvalidArg(format!(
                "indicator windows must be at least 1: {:?}",
                self.windows
            )));
        }

        let coinscope = self.coinscope;
        let windows = self.windows;
        let tasks = self.assets.iter().map(|asset| async move {
            let res = async {
                let series = coinscope.fetch(asset, coinscope.cfg.history_limit).await?;
                compute_indicators(&series, windows)
            }
            .await;
            (asset, res)
        });

        let joined: Vec<(&AssetId, Result<IndicatorSeries, CoinscopeError>)> = coinscope
            .with_request_deadline("analyze_batch", futures::future::join_all(tasks))
            .await?;

        let mut report = AnalysisReport::default();
        for (asset, result) in joined {
            match result {
                Ok(series) => report.entries.push(series),
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(asset = %asset, error = %error, "asset analysis failed");
                    report.warnings.push(AssetWarning {
                        asset: asset.clone(),
                        error,
                    });
                }
            }
        }
        Ok(report)
    }
}

impl Coinscope {
    /// Begin building a batch indicator analysis.
    ///
    /// Typical usage: chain `assets`/`windows` then call `run()`.
    #[must_use]
    pub const fn batch(&'_ self) -> AnalyzeBuilder<'_> {
        AnalyzeBuilder::new(self)
    }

    /// Analyze several assets concurrently with the configured windows.
    ///
    /// Shorthand for `self.batch().assets(assets)?.run()`.
    ///
    /// # Errors
    /// See [`AnalyzeBuilder::run`]; duplicates are rejected with `InvalidArg`.
    pub async fn analyze_batch(&self, assets: &[AssetId]) -> Result<AnalysisReport, CoinscopeError> {
        self.batch().assets(assets)?.run().await
    }
}
