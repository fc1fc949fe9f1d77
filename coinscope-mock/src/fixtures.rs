//! Deterministic price curves served by `MockStore`.

use chrono::{DateTime, Utc};
use coinscope_core::Observation;

/// 2024-01-01T00:00:00Z
pub const ANCHOR: i64 = 1_704_067_200;

/// Cadence of the regular fixtures.
pub const STEP_SECS: i64 = 120;

/// Cadence of `late-coin`.
pub const LATE_STEP_SECS: i64 = 300;

/// Number of points in each regular fixture (one day at two-minute cadence).
pub const POINTS: usize = 720;

struct Shape {
    base: f64,
    drift: f64,
    amplitude: f64,
    period: f64,
    phase: f64,
    supply: f64,
}

/// Full fixture history for an asset, ascending, or `None` for unknown ids.
pub fn by_asset(asset: &str) -> Option<Vec<Observation>> {
    match asset {
        "bitcoin" => Some(build(
            ANCHOR,
            STEP_SECS,
            POINTS,
            &Shape {
                base: 42_000.0,
                drift: 1.5,
                amplitude: 0.012,
                period: 90.0,
                phase: 0.0,
                supply: 19_600_000.0,
            },
        )),
        "ethereum" => Some(build(
            ANCHOR,
            STEP_SECS,
            POINTS,
            &Shape {
                base: 2_300.0,
                drift: 0.09,
                amplitude: 0.015,
                period: 90.0,
                phase: 0.4,
                supply: 120_000_000.0,
            },
        )),
        "matic-network" => Some(build(
            ANCHOR,
            STEP_SECS,
            POINTS,
            &Shape {
                base: 0.98,
                drift: -0.000_05,
                amplitude: 0.03,
                period: 37.0,
                phase: 2.1,
                supply: 9_300_000_000.0,
            },
        )),
        // Starts an hour after the others and reports every five minutes.
        "late-coin" => Some(build(
            ANCHOR + 3_600,
            LATE_STEP_SECS,
            276,
            &Shape {
                base: 12.5,
                drift: 0.002,
                amplitude: 0.02,
                period: 24.0,
                phase: 1.0,
                supply: 50_000_000.0,
            },
        )),
        _ => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn build(start: i64, step: i64, points: usize, shape: &Shape) -> Vec<Observation> {
    let price_at = |x: f64| {
        let wave = (std::f64::consts::TAU * x / shape.period + shape.phase).sin();
        (shape.base + shape.drift * x) * (1.0 + shape.amplitude * wave)
    };
    // 24h lookback in samples at this cadence; the curve extends before `start`
    let day = (86_400 / step) as f64;

    (0..points)
        .filter_map(|i| {
            let offset = i64::try_from(i).ok()? * step;
            let ts: DateTime<Utc> = DateTime::from_timestamp(start + offset, 0)?;
            let x = i as f64;
            let price = price_at(x);
            let before = price_at(x - day);
            Some(Observation {
                ts,
                price,
                market_cap: Some(price * shape.supply),
                change_24h: Some((price - before) / before * 100.0),
            })
        })
        .collect()
}
