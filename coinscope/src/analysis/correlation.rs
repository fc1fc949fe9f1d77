use coinscope_core::{
    AssetId, CoinscopeError, CorrelationReport, RollingCorrelation, pairwise_matrix,
    rolling_pair_correlation,
};

use crate::Coinscope;

impl Coinscope {
    /// Aligned table, full correlation matrix and rolling pair correlations.
    ///
    /// Behavior:
    /// - Alignment is fail-fast (see [`aligned`](Self::aligned)).
    /// - `pairs` defaults to every unordered pair of `assets` in the given order.
    /// - Each rolling correlation uses `rolling_window`; a pair naming the same
    ///   asset twice or an asset outside the table becomes a warning and the
    ///   remaining pairs are still computed.
    ///
    /// # Errors
    /// Any error from [`aligned`](Self::aligned).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinscope::correlation_report",
            skip(self, assets, pairs),
            fields(assets = assets.len(), window = self.cfg.rolling_window),
        )
    )]
    pub async fn correlation_report(
        &self,
        assets: &[AssetId],
        pairs: Option<&[(AssetId, AssetId)]>,
    ) -> Result<CorrelationReport, CoinscopeError> {
        let table = self.aligned(assets).await?;
        let matrix = pairwise_matrix(&table)?;

        let default_pairs;
        let pairs = if let Some(p) = pairs {
            p
        } else {
            default_pairs = unordered_pairs(assets);
            &default_pairs
        };

        let mut rolling = Vec::with_capacity(pairs.len());
        let mut warnings = Vec::new();
        for (a, b) in pairs {
            match rolling_pair_correlation(&table, a.as_str(), b.as_str(), self.cfg.rolling_window) {
                Ok(r) => rolling.push(r),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(pair = %format!("{a}/{b}"), error = %e, "rolling correlation skipped");
                    warnings.push(e);
                }
            }
        }

        Ok(CorrelationReport {
            table,
            matrix,
            rolling,
            warnings,
        })
    }

    /// Rolling correlation for a single pair of assets.
    ///
    /// Aligns just the two assets and applies `rolling_window`.
    ///
    /// # Errors
    /// `InvalidPair` when both names are the same (checked before any fetch),
    /// otherwise any error from [`aligned`](Self::aligned).
    pub async fn rolling_correlation(
        &self,
        asset_a: &AssetId,
        asset_b: &AssetId,
    ) -> Result<RollingCorrelation, CoinscopeError> {
        if asset_a == asset_b {
            return Err(CoinscopeError::InvalidPair {
                asset: asset_a.to_string(),
            });
        }
        let table = self.aligned(&[asset_a.clone(), asset_b.clone()]).await?;
        rolling_pair_correlation(
            &table,
            asset_a.as_str(),
            asset_b.as_str(),
            self.cfg.rolling_window,
        )
    }
}

fn unordered_pairs(assets: &[AssetId]) -> Vec<(AssetId, AssetId)> {
    assets
        .iter()
        .enumerate()
        .flat_map(|(i, a)| assets[i + 1..].iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}
