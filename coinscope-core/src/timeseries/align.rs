use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::timeseries::resample::{ResampledPoint, resample_series};
use crate::{AlignedRow, AlignedTable, AssetId, Cell, CoinscopeError, Series};

/// Forward-filling view of one resampled column while walking the union grid.
struct ColumnCursor {
    points: Vec<ResampledPoint>,
    next: usize,
    last_price: Option<f64>,
}

impl ColumnCursor {
    const fn new(points: Vec<ResampledPoint>) -> Self {
        Self {
            points,
            next: 0,
            last_price: None,
        }
    }

    /// Cell at grid time `ts`; timestamps must be visited in ascending order.
    fn at(&mut self, ts: DateTime<Utc>) -> Option<Cell> {
        while let Some(p) = self.points.get(self.next) {
            if p.ts > ts {
                break;
            }
            self.next += 1;
            self.last_price = Some(p.price);
            if p.ts == ts {
                return Some(Cell {
                    price: p.price,
                    stale: p.stale,
                });
            }
        }
        self.last_price.map(|price| Cell { price, stale: true })
    }
}

/// Align several independently sampled series onto one grid.
///
/// 1. Each series is resampled to `step` buckets with forward-fill.
/// 2. The union of all grid timestamps forms the row index; each asset's cell
///    is its resampled value at that timestamp, else its last known value.
/// 3. Leading rows are dropped until every asset has a value. Forward-fill
///    guarantees every later row is complete.
///
/// Columns follow the iteration order of `series`. Cells carried forward
/// without a fresh observation in their bucket are marked `stale`.
///
/// # Errors
/// - `InvalidArg` if no series is given, an asset appears twice, or `step` is invalid.
/// - `NoData` naming the first asset whose series is empty.
pub fn align<'a, I>(series: I, step: Duration) -> Result<AlignedTable, CoinscopeError>
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut assets: Vec<AssetId> = Vec::new();
    let mut columns: Vec<ColumnCursor> = Vec::new();
    let mut grid: BTreeSet<DateTime<Utc>> = BTreeSet::new();

    for s in series {
        if assets.contains(s.asset()) {
            return Err(CoinscopeError::InvalidArg(format!(
                "duplicate asset '{}' in alignment input",
                s.asset()
            )));
        }
        let points = resample_series(s, step)?;
        grid.extend(points.iter().map(|p| p.ts));
        assets.push(s.asset().clone());
        columns.push(ColumnCursor::new(points));
    }

    if assets.is_empty() {
        return Err(CoinscopeError::InvalidArg("no series to align".into()));
    }

    #[cfg(feature = "tracing")]
    let grid_len = grid.len();
    let mut rows: Vec<AlignedRow> = Vec::with_capacity(grid.len());
    for ts in grid {
        let cells: Option<Vec<Cell>> = columns.iter_mut().map(|c| c.at(ts)).collect();
        match cells {
            Some(cells) => rows.push(AlignedRow { ts, cells }),
            None if rows.is_empty() => {}
            None => {
                return Err(CoinscopeError::Data(format!(
                    "aligned row at {ts} has an undefined cell after the complete prefix"
                )));
            }
        }
    }

    let table = AlignedTable::try_new(step, assets, rows)?;
    #[cfg(feature = "tracing")]
    {
        let stale = table
            .assets()
            .iter()
            .enumerate()
            .map(|(col, a)| {
                let n = table.rows().iter().filter(|r| r.cells[col].stale).count();
                format!("{a}:{n}")
            })
            .collect::<Vec<_>>()
            .join(",");
        tracing::debug!(
            target: "coinscope_core::align",
            assets = table.assets().len(),
            rows = table.len(),
            trimmed = grid_len - table.len(),
            stale = %stale,
            "aligned series onto shared grid"
        );
    }
    Ok(table)
}
