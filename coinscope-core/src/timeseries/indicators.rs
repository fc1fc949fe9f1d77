use std::num::NonZeroUsize;

use crate::timeseries::stats::{mean, sample_std};
use crate::{CoinscopeError, IndicatorPoint, IndicatorSeries, IndicatorWindows, Series};

/// Apply `f` to every trailing window of `values`.
///
/// Index `i` gets `f(values[i + 1 - w ..= i])`; the first `w - 1` indices are
/// `None`. A window longer than the input yields all `None`.
fn trailing<F>(values: &[f64], window: NonZeroUsize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let w = window.get();
    (0..values.len())
        .map(|i| (i + 1 >= w).then(|| f(&values[i + 1 - w..=i])))
        .collect()
}

/// Trailing simple moving average.
///
/// ```
/// use coinscope_core::sma;
/// use std::num::NonZeroUsize;
///
/// let out = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], NonZeroUsize::new(3).unwrap());
/// assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
#[must_use]
pub fn sma(values: &[f64], window: NonZeroUsize) -> Vec<Option<f64>> {
    trailing(values, window, |w| mean(w).unwrap_or(f64::NAN))
}

/// Trailing Bessel-corrected standard deviation.
///
/// A constant window (and a one-sample window) yields exactly `0.0`.
#[must_use]
pub fn rolling_std(values: &[f64], window: NonZeroUsize) -> Vec<Option<f64>> {
    trailing(values, window, sample_std)
}

fn non_zero(w: usize, label: &str) -> Result<NonZeroUsize, CoinscopeError> {
    NonZeroUsize::new(w)
        .ok_or_else(|| CoinscopeError::InvalidArg(format!("{label} window must be at least 1")))
}

/// Compute short/long SMAs and rolling volatility for one series.
///
/// The result has one point per observation. Windows longer than the series
/// leave the corresponding column entirely `None`; that is not an error.
/// The input series is not modified.
///
/// # Errors
/// Returns `InvalidArg` if any window is zero.
pub fn compute_indicators(
    series: &Series,
    windows: IndicatorWindows,
) -> Result<IndicatorSeries, CoinscopeError> {
    let short = non_zero(windows.short, "short")?;
    let long = non_zero(windows.long, "long")?;
    let vol = non_zero(windows.volatility, "volatility")?;

    let prices = series.prices();
    let sma_short = sma(&prices, short);
    let sma_long = sma(&prices, long);
    let volatility = rolling_std(&prices, vol);

    let points = series
        .observations()
        .iter()
        .enumerate()
        .map(|(i, o)| IndicatorPoint {
            ts: o.ts,
            price: o.price,
            sma_short: sma_short[i],
            sma_long: sma_long[i],
            volatility: volatility[i],
        })
        .collect();

    Ok(IndicatorSeries {
        asset: series.asset().clone(),
        windows,
        points,
    })
}
