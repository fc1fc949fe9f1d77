#![allow(dead_code)]

use std::sync::Arc;

use chrono::DateTime;
use coinscope::{AssetId, Coinscope, CoinscopeBuilder, Observation, Series};
use coinscope_mock::MockStore;

/// Builder pre-wired to the fixture store.
pub fn mock_builder() -> CoinscopeBuilder {
    Coinscope::builder().store(Arc::new(MockStore::new()))
}

pub fn mock() -> Coinscope {
    mock_builder().build().expect("valid default config")
}

pub fn id(s: &str) -> AssetId {
    AssetId::new(s).expect("valid asset id")
}

pub fn ids(names: &[&str]) -> Vec<AssetId> {
    names.iter().map(|n| id(n)).collect()
}

/// Series with one observation per `(unix_secs, price)` pair.
pub fn series(asset: &str, points: &[(i64, f64)]) -> Series {
    Series::new(
        id(asset),
        points
            .iter()
            .map(|&(t, p)| Observation::new(DateTime::from_timestamp(t, 0).unwrap(), p))
            .collect(),
    )
}
