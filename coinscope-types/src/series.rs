//! Raw per-asset price history as supplied by a series store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AssetId;

/// One stored price snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Snapshot time.
    pub ts: DateTime<Utc>,
    /// Spot price. Expected non-negative; not enforced.
    pub price: f64,
    /// Market capitalisation at snapshot time, when the store recorded it.
    pub market_cap: Option<f64>,
    /// 24h price change in percent, when the store recorded it.
    pub change_24h: Option<f64>,
}

impl Observation {
    /// Observation carrying only a timestamp and a price.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, price: f64) -> Self {
        Self {
            ts,
            price,
            market_cap: None,
            change_24h: None,
        }
    }
}

/// Ordered observations for a single asset.
///
/// Observations are kept ascending by timestamp. Duplicate timestamps are
/// allowed and keep their arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SeriesRepr")]
pub struct Series {
    asset: AssetId,
    observations: Vec<Observation>,
}

// Deserialized input goes through `Series::new` so stored files need not be sorted.
#[derive(Deserialize)]
struct SeriesRepr {
    asset: AssetId,
    observations: Vec<Observation>,
}

impl From<SeriesRepr> for Series {
    fn from(raw: SeriesRepr) -> Self {
        Self::new(raw.asset, raw.observations)
    }
}

impl Series {
    /// Build a series, sorting observations by timestamp (stable).
    #[must_use]
    pub fn new(asset: AssetId, mut observations: Vec<Observation>) -> Self {
        if !observations.is_sorted_by_key(|o| o.ts) {
            observations.sort_by_key(|o| o.ts);
        }
        Self {
            asset,
            observations,
        }
    }

    /// Asset this series belongs to.
    #[must_use]
    pub const fn asset(&self) -> &AssetId {
        &self.asset
    }

    /// Observations in ascending time order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Prices in ascending time order.
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.price).collect()
    }

    /// Timestamps in ascending order.
    #[must_use]
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.observations.iter().map(|o| o.ts).collect()
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Earliest observation.
    #[must_use]
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Most recent observation.
    #[must_use]
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Keep only the most recent `n` observations.
    #[must_use]
    pub fn tail(&self, n: usize) -> Self {
        let start = self.observations.len().saturating_sub(n);
        Self {
            asset: self.asset.clone(),
            observations: self.observations[start..].to_vec(),
        }
    }
}
