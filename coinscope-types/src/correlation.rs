//! Correlation results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AssetId, CoinscopeError};

/// Pearson correlation outcome.
///
/// `Undefined` is reported when either input has zero variance over the
/// compared window; it is distinct from a coefficient of `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Correlation {
    /// Coefficient in `[-1, 1]`.
    Coefficient(f64),
    /// At least one side was constant over the window.
    Undefined,
}

impl Correlation {
    /// Coefficient if defined.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Coefficient(v) => Some(v),
            Self::Undefined => None,
        }
    }

    /// True for the zero-variance case.
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

/// Symmetric pairwise correlation matrix over a set of assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CorrelationMatrixRepr")]
pub struct CorrelationMatrix {
    assets: Vec<AssetId>,
    values: Vec<Correlation>,
}

#[derive(Deserialize)]
struct CorrelationMatrixRepr {
    assets: Vec<AssetId>,
    values: Vec<Correlation>,
}

impl TryFrom<CorrelationMatrixRepr> for CorrelationMatrix {
    type Error = CoinscopeError;

    fn try_from(raw: CorrelationMatrixRepr) -> Result<Self, Self::Error> {
        Self::try_new(raw.assets, raw.values)
    }
}

impl CorrelationMatrix {
    /// Build a matrix from row-major values.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `values.len()` is not `assets.len()` squared.
    pub fn try_new(assets: Vec<AssetId>, values: Vec<Correlation>) -> Result<Self, CoinscopeError> {
        let n = assets.len();
        if values.len() != n * n {
            return Err(CoinscopeError::InvalidArg(format!(
                "correlation matrix for {n} assets needs {} values, got {}",
                n * n,
                values.len()
            )));
        }
        Ok(Self { assets, values })
    }

    /// Assets in row/column order.
    #[must_use]
    pub fn assets(&self) -> &[AssetId] {
        &self.assets
    }

    /// Number of assets (matrix dimension).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.assets.len()
    }

    /// Value at row `i`, column `j`.
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> Option<Correlation> {
        let n = self.assets.len();
        if i >= n || j >= n {
            return None;
        }
        self.values.get(i * n + j).copied()
    }

    /// Correlation between two named assets.
    ///
    /// # Errors
    /// Returns `UnknownAsset` if either asset is not part of the matrix.
    pub fn get(&self, a: &str, b: &str) -> Result<Correlation, CoinscopeError> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.values[i * self.assets.len() + j])
    }

    /// Rows of the matrix in asset order.
    pub fn rows(&self) -> impl Iterator<Item = &[Correlation]> {
        self.values.chunks(self.assets.len().max(1))
    }

    fn index_of(&self, asset: &str) -> Result<usize, CoinscopeError> {
        self.assets
            .iter()
            .position(|a| a.as_str() == asset)
            .ok_or_else(|| CoinscopeError::unknown_asset(asset))
    }
}

/// Rolling correlation value at one grid timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingPoint {
    /// Grid timestamp closing the window.
    pub ts: DateTime<Utc>,
    /// `None` during the warm-up prefix.
    pub value: Option<Correlation>,
}

/// Trailing correlation between two assets of an aligned table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingCorrelation {
    /// First asset of the pair.
    pub asset_a: AssetId,
    /// Second asset of the pair.
    pub asset_b: AssetId,
    /// Window length in rows.
    pub window: usize,
    /// One point per table row.
    pub points: Vec<RollingPoint>,
}

impl RollingCorrelation {
    /// Defined coefficients only, with their timestamps.
    #[must_use]
    pub fn coefficients(&self) -> Vec<(DateTime<Utc>, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.value.and_then(Correlation::value).map(|v| (p.ts, v)))
            .collect()
    }
}
