use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::{CoinscopeError, Series};

/// Largest grid a single series may be resampled onto, in buckets.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// One grid point of a resampled series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampledPoint {
    /// Bucket start.
    pub ts: DateTime<Utc>,
    /// Last observed price at or before the bucket end.
    pub price: f64,
    /// True when the bucket had no observation and the price was carried forward.
    pub stale: bool,
}

pub(crate) fn step_seconds(step: Duration) -> Result<i64, CoinscopeError> {
    if step.subsec_nanos() != 0 {
        return Err(CoinscopeError::InvalidArg(format!(
            "grid step must be a whole number of seconds, got {step:?}"
        )));
    }
    match i64::try_from(step.as_secs()) {
        Ok(s) if s > 0 => Ok(s),
        _ => Err(CoinscopeError::InvalidArg(format!(
            "grid step must be positive, got {step:?}"
        ))),
    }
}

/// Start of the `step`-wide bucket containing `ts`, anchored at the Unix epoch.
#[must_use]
pub fn bucket_start(ts: DateTime<Utc>, step_secs: i64) -> Option<DateTime<Utc>> {
    if step_secs <= 0 {
        return None;
    }
    let t = ts.timestamp();
    DateTime::from_timestamp(t - t.rem_euclid(step_secs), 0)
}

/// Bucket a series onto a contiguous grid of width `step` and forward-fill.
///
/// - Buckets are `[start, start + step)` with `start` a multiple of `step`
///   since the epoch; the output is labelled by bucket start.
/// - A bucket's price is the last observation inside it (later arrivals win
///   on equal timestamps).
/// - Empty buckets between the first and last observed bucket carry the
///   previous price forward and are marked `stale`.
///
/// The output covers the whole span from first to last observation, so a
/// long feed outage on a fine grid produces one stale point per bucket.
///
/// # Errors
/// - `NoData` if the series is empty.
/// - `InvalidArg` if `step` is zero or not a whole number of seconds, or the
///   span needs more than [`MAX_GRID_POINTS`] buckets.
pub fn resample_series(series: &Series, step: Duration) -> Result<Vec<ResampledPoint>, CoinscopeError> {
    let step_secs = step_seconds(step)?;
    if series.is_empty() {
        return Err(CoinscopeError::no_data(series.asset().as_str()));
    }

    // Last price per observed bucket, in time order.
    let mut observed: Vec<(i64, f64)> = Vec::new();
    for o in series.observations() {
        let Some(bucket) = bucket_start(o.ts, step_secs) else {
            continue;
        };
        let key = bucket.timestamp();
        match observed.last_mut() {
            Some((cur, price)) if *cur == key => *price = o.price,
            _ => observed.push((key, o.price)),
        }
    }

    if let (Some(&(first, _)), Some(&(last, _))) = (observed.first(), observed.last()) {
        let buckets = (last - first) / step_secs + 1;
        if !usize::try_from(buckets).is_ok_and(|n| n <= MAX_GRID_POINTS) {
            return Err(CoinscopeError::InvalidArg(format!(
                "{} spans {buckets} buckets of {step_secs}s, more than {MAX_GRID_POINTS}",
                series.asset()
            )));
        }
    }

    let mut out: Vec<ResampledPoint> = Vec::with_capacity(observed.len());
    let mut iter = observed.into_iter().peekable();
    while let Some((key, price)) = iter.next() {
        let Some(ts) = DateTime::from_timestamp(key, 0) else {
            continue;
        };
        out.push(ResampledPoint {
            ts,
            price,
            stale: false,
        });
        if let Some(&(next_key, _)) = iter.peek() {
            let mut fill = key + step_secs;
            while fill < next_key {
                if let Some(ts) = DateTime::from_timestamp(fill, 0) {
                    out.push(ResampledPoint {
                        ts,
                        price,
                        stale: true,
                    });
                }
                fill += step_secs;
            }
        }
    }

    if out.is_empty() {
        return Err(CoinscopeError::no_data(series.asset().as_str()));
    }
    Ok(out)
}
