//! Derived single-series indicators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AssetId, IndicatorWindows};

/// Indicator values at one index of the source series.
///
/// `None` marks the warm-up prefix of the corresponding window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    /// Timestamp of the source observation.
    pub ts: DateTime<Utc>,
    /// Source price.
    pub price: f64,
    /// Short trailing simple moving average.
    pub sma_short: Option<f64>,
    /// Long trailing simple moving average.
    pub sma_long: Option<f64>,
    /// Trailing sample standard deviation.
    pub volatility: Option<f64>,
}

/// Indicator values aligned index-for-index with a source series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    /// Asset the source series belongs to.
    pub asset: AssetId,
    /// Windows used to compute the values.
    pub windows: IndicatorWindows,
    /// One point per source observation.
    pub points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// Number of points (equal to the source series length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the source series was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Short SMA column.
    #[must_use]
    pub fn sma_short(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.sma_short).collect()
    }

    /// Long SMA column.
    #[must_use]
    pub fn sma_long(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.sma_long).collect()
    }

    /// Volatility column.
    #[must_use]
    pub fn volatility(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.volatility).collect()
    }

    /// Most recent point.
    #[must_use]
    pub fn last(&self) -> Option<&IndicatorPoint> {
        self.points.last()
    }
}
