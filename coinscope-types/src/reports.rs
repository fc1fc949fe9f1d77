//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::{
    AlignedTable, AssetId, CoinscopeError, CorrelationMatrix, IndicatorSeries, Observation,
    RollingCorrelation,
};

/// A per-asset failure recorded in a batch without aborting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetWarning {
    /// Asset whose fetch or computation failed.
    pub asset: AssetId,
    /// The failure, already tagged with its store where applicable.
    pub error: CoinscopeError,
}

/// Summary of a multi-asset indicator analysis.
///
/// Assets that failed are reported in `warnings`; the rest are in `entries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisReport {
    /// Successful per-asset indicator series, in request order.
    pub entries: Vec<IndicatorSeries>,
    /// Non-fatal per-asset failures, in request order.
    pub warnings: Vec<AssetWarning>,
}

impl AnalysisReport {
    /// Indicator series for an asset, if it succeeded.
    #[must_use]
    pub fn entry(&self, asset: &str) -> Option<&IndicatorSeries> {
        self.entries.iter().find(|e| e.asset.as_str() == asset)
    }

    /// Assets that failed, in request order.
    #[must_use]
    pub fn failed_assets(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.asset.as_str()).collect()
    }

    /// True when at least one asset produced indicators.
    #[must_use]
    pub fn has_success(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// Summary of a correlation analysis over an aligned table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Aligned price table the statistics were computed on.
    pub table: AlignedTable,
    /// Pairwise correlation over the whole table.
    pub matrix: CorrelationMatrix,
    /// Rolling correlation for each requested pair that was valid.
    pub rolling: Vec<RollingCorrelation>,
    /// Pairs that could not be computed.
    pub warnings: Vec<CoinscopeError>,
}

/// Sample standard deviation over the most recent prices of one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationSummary {
    /// Asset the prices belong to.
    pub asset: AssetId,
    /// Bessel-corrected standard deviation.
    pub stddev: f64,
    /// Number of prices used.
    pub samples: usize,
}

/// One page of stored snapshots, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    /// Asset the snapshots belong to.
    pub asset: AssetId,
    /// 1-based page number.
    pub page: usize,
    /// Page size requested.
    pub limit: usize,
    /// Snapshots stored for the asset.
    pub total: usize,
    /// Number of pages of `limit` needed to cover `total`.
    pub pages: usize,
    /// Snapshots on this page. Empty past the last page.
    pub data: Vec<Observation>,
}
