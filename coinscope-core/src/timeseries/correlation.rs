use crate::timeseries::stats::{is_constant, pearson};
use crate::{
    AlignedTable, CoinscopeError, Correlation, CorrelationMatrix, RollingCorrelation, RollingPoint,
};

/// Pearson correlation for every pair of columns over the whole table.
///
/// The matrix is symmetric. The diagonal is `1.0` for every column with
/// non-zero variance and `Undefined` for a constant column.
///
/// # Errors
/// Propagates shape errors from `CorrelationMatrix::try_new` (not expected for
/// a well-formed table).
pub fn pairwise_matrix(table: &AlignedTable) -> Result<CorrelationMatrix, CoinscopeError> {
    let columns: Vec<Vec<f64>> = table
        .assets()
        .iter()
        .map(|a| table.prices(a.as_str()))
        .collect::<Result<_, _>>()?;
    let n = columns.len();

    let mut values = vec![Correlation::Undefined; n * n];
    for i in 0..n {
        values[i * n + i] = if is_constant(&columns[i]) {
            Correlation::Undefined
        } else {
            Correlation::Coefficient(1.0)
        };
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            values[i * n + j] = r;
            values[j * n + i] = r;
        }
    }

    CorrelationMatrix::try_new(table.assets().to_vec(), values)
}

/// Trailing Pearson correlation between two columns.
///
/// Row `i` covers rows `i + 1 - window ..= i`; the first `window - 1` rows
/// are warm-up (`None`). Windows where either column is constant yield
/// `Some(Correlation::Undefined)`.
///
/// # Errors
/// - `InvalidPair` if `asset_a == asset_b`.
/// - `UnknownAsset` if either asset is not a column.
/// - `InvalidArg` if `window` is zero.
pub fn rolling_pair_correlation(
    table: &AlignedTable,
    asset_a: &str,
    asset_b: &str,
    window: usize,
) -> Result<RollingCorrelation, CoinscopeError> {
    if asset_a == asset_b {
        return Err(CoinscopeError::InvalidPair {
            asset: asset_a.to_string(),
        });
    }
    let col_a = table.column(asset_a)?;
    let col_b = table.column(asset_b)?;
    if window == 0 {
        return Err(CoinscopeError::InvalidArg(
            "rolling correlation window must be at least 1".into(),
        ));
    }

    let xs = table.prices(asset_a)?;
    let ys = table.prices(asset_b)?;
    let points = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| RollingPoint {
            ts: row.ts,
            value: (i + 1 >= window).then(|| {
                let lo = i + 1 - window;
                pearson(&xs[lo..=i], &ys[lo..=i])
            }),
        })
        .collect();

    Ok(RollingCorrelation {
        asset_a: table.assets()[col_a].clone(),
        asset_b: table.assets()[col_b].clone(),
        window,
        points,
    })
}
