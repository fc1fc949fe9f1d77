use std::collections::BTreeMap;

use crate::Series;

/// Sampling cadence of a series, in whole seconds.
///
/// Counts the gaps between consecutive distinct timestamps and returns the
/// most frequent gap. When several gaps share the top count, returns the lower
/// median of all gaps instead, which is always a gap that actually occurs.
///
/// ```
/// use coinscope_core::{estimate_step_seconds, AssetId, Observation, Series};
/// use chrono::DateTime;
///
/// let obs = |s: i64| Observation::new(DateTime::from_timestamp(s, 0).unwrap(), 1.0);
/// // Gaps: 120, 120, 120, 240
/// let series = Series::new(
///     AssetId::new("bitcoin").unwrap(),
///     vec![obs(0), obs(120), obs(240), obs(360), obs(600)],
/// );
/// assert_eq!(estimate_step_seconds(&series), Some(120));
/// ```
///
/// Returns `None` with fewer than two distinct timestamps.
#[must_use]
pub fn estimate_step_seconds(series: &Series) -> Option<i64> {
    // Series keeps observations ascending, so zero gaps are the only duplicates.
    let mut gaps: BTreeMap<i64, usize> = BTreeMap::new();
    for pair in series.observations().windows(2) {
        let gap = (pair[1].ts - pair[0].ts).num_seconds();
        if gap > 0 {
            *gaps.entry(gap).or_default() += 1;
        }
    }

    let top = gaps.values().copied().max()?;
    let mut leaders = gaps.iter().filter(|&(_, &n)| n == top);
    if let (Some((&gap, _)), None) = (leaders.next(), leaders.next()) {
        return Some(gap);
    }

    let total: usize = gaps.values().sum();
    let mid = (total - 1) / 2;
    let mut seen = 0;
    gaps.into_iter().find_map(|(gap, n)| {
        seen += n;
        (seen > mid).then_some(gap)
    })
}
