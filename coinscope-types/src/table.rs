//! Multi-asset price table on a shared time grid.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AssetId, CoinscopeError};

/// One asset's value at one grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Last known price as of the grid point.
    pub price: f64,
    /// True when no observation fell into this grid bucket and the price was
    /// carried forward from an earlier bucket.
    pub stale: bool,
}

/// One grid timestamp with a cell per asset column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    /// Grid timestamp (bucket start).
    pub ts: DateTime<Utc>,
    /// Cells in the table's column order.
    pub cells: Vec<Cell>,
}

/// Prices for several assets joined on a common grid.
///
/// Every row has a value for every asset column: rows without full coverage
/// are trimmed while the table is built, never null-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AlignedTableRepr")]
pub struct AlignedTable {
    step: Duration,
    assets: Vec<AssetId>,
    rows: Vec<AlignedRow>,
}

#[derive(Deserialize)]
struct AlignedTableRepr {
    step: Duration,
    assets: Vec<AssetId>,
    rows: Vec<AlignedRow>,
}

impl TryFrom<AlignedTableRepr> for AlignedTable {
    type Error = CoinscopeError;

    fn try_from(raw: AlignedTableRepr) -> Result<Self, Self::Error> {
        Self::try_new(raw.step, raw.assets, raw.rows)
    }
}

impl AlignedTable {
    /// Build a table after checking its shape.
    ///
    /// # Errors
    /// Returns `InvalidArg` if there are no assets, assets repeat, a row's cell
    /// count differs from the asset count, or row timestamps are not strictly
    /// ascending.
    pub fn try_new(
        step: Duration,
        assets: Vec<AssetId>,
        rows: Vec<AlignedRow>,
    ) -> Result<Self, CoinscopeError> {
        if assets.is_empty() {
            return Err(CoinscopeError::InvalidArg("aligned table has no assets".into()));
        }
        for (i, a) in assets.iter().enumerate() {
            if assets[..i].contains(a) {
                return Err(CoinscopeError::InvalidArg(format!(
                    "duplicate asset column '{a}'"
                )));
            }
        }
        if let Some(bad) = rows.iter().find(|r| r.cells.len() != assets.len()) {
            return Err(CoinscopeError::InvalidArg(format!(
                "row at {} has {} cells, expected {}",
                bad.ts,
                bad.cells.len(),
                assets.len()
            )));
        }
        if rows.windows(2).any(|w| w[0].ts >= w[1].ts) {
            return Err(CoinscopeError::InvalidArg(
                "aligned rows must be strictly ascending by timestamp".into(),
            ));
        }
        Ok(Self {
            step,
            assets,
            rows,
        })
    }

    /// Grid step the table was built with.
    #[must_use]
    pub const fn step(&self) -> Duration {
        self.step
    }

    /// Asset columns in order.
    #[must_use]
    pub fn assets(&self) -> &[AssetId] {
        &self.assets
    }

    /// Rows in ascending time order.
    #[must_use]
    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no row survived trimming.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Grid timestamps in order.
    #[must_use]
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.rows.iter().map(|r| r.ts).collect()
    }

    /// Column index of an asset.
    ///
    /// # Errors
    /// Returns `UnknownAsset` if the asset is not a column.
    pub fn column(&self, asset: &str) -> Result<usize, CoinscopeError> {
        self.assets
            .iter()
            .position(|a| a.as_str() == asset)
            .ok_or_else(|| CoinscopeError::unknown_asset(asset))
    }

    /// Price column for an asset.
    ///
    /// # Errors
    /// Returns `UnknownAsset` if the asset is not a column.
    pub fn prices(&self, asset: &str) -> Result<Vec<f64>, CoinscopeError> {
        let col = self.column(asset)?;
        Ok(self.rows.iter().map(|r| r.cells[col].price).collect())
    }

    /// Number of forward-filled (stale) cells in an asset's column.
    ///
    /// # Errors
    /// Returns `UnknownAsset` if the asset is not a column.
    pub fn stale_count(&self, asset: &str) -> Result<usize, CoinscopeError> {
        let col = self.column(asset)?;
        Ok(self.rows.iter().filter(|r| r.cells[col].stale).count())
    }
}
